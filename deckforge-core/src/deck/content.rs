//! Copy of the reference deck, one table per slide.
//!
//! Positions in this file are in inches. Everything else about placement lives
//! in the builders.

use crate::geometry::{Point, Size};
use crate::graphics::Palette;
use crate::layout::{HeaderTheme, PageHeader};
use crate::text::{Alignment, TextStyle};

/// Brand label in the top-right corner of every header.
pub const BRAND: &str = "94Cram 智慧補教";

const fn light(title: &'static str, subtitle: &'static str) -> PageHeader<'static> {
    PageHeader {
        title,
        subtitle: Some(subtitle),
        brand: BRAND,
        theme: HeaderTheme::Light,
    }
}

const fn dark(title: &'static str, subtitle: &'static str) -> PageHeader<'static> {
    PageHeader {
        title,
        subtitle: Some(subtitle),
        brand: BRAND,
        theme: HeaderTheme::Dark,
    }
}

/// A frame in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub const fn area(x: f64, y: f64, width: f64, height: f64) -> Area {
    Area {
        x,
        y,
        width,
        height,
    }
}

impl Area {
    pub fn origin(&self) -> Point {
        Point::inches(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::inches(self.width, self.height)
    }
}

/// A positioned single-paragraph text box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub area: Area,
    pub text: &'static str,
    pub font_size: f64,
    pub color: Palette,
    pub bold: bool,
    pub alignment: Alignment,
}

pub const fn label(area: Area, text: &'static str, font_size: f64, color: Palette) -> Label {
    Label {
        area,
        text,
        font_size,
        color,
        bold: false,
        alignment: Alignment::Left,
    }
}

impl Label {
    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn centered(self) -> Self {
        Self {
            alignment: Alignment::Center,
            ..self
        }
    }

    pub fn style(&self) -> TextStyle {
        TextStyle::new(self.font_size, self.color).with_bold(self.bold)
    }
}

/// One element of a free-form slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    /// Full-width bar along the top edge, with its height in inches
    TopBar(f64, Palette),
    Bar(Area, Palette),
    Panel(Area, Palette),
    Disc {
        x: f64,
        y: f64,
        diameter: f64,
        color: Palette,
    },
    Text(Label),
}

/// Free-form slide drawn element by element.
#[derive(Debug, Clone, Copy)]
pub struct Poster {
    pub background: Palette,
    pub elements: &'static [Element],
}

/// Icon, title and description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const fn card(icon: &'static str, title: &'static str, description: &'static str) -> Card {
    Card {
        icon,
        title,
        description,
    }
}

/// A [`Card`] with its own accent color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentCard {
    pub card: Card,
    pub color: Palette,
}

const fn accent_card(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    color: Palette,
) -> AccentCard {
    AccentCard {
        card: card(icon, title, description),
        color,
    }
}

/// Title and description without an icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

const fn feature(title: &'static str, description: &'static str) -> Feature {
    Feature { title, description }
}

/// Wide panel with a bold line over a caption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Banner {
    pub headline: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AccentCardGrid {
    pub header: PageHeader<'static>,
    pub cards: &'static [AccentCard],
}

#[derive(Debug, Clone, Copy)]
pub struct CardGrid {
    pub header: PageHeader<'static>,
    pub cards: &'static [Card],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemColumn {
    /// Single character on the round badge
    pub badge: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub features: &'static str,
    pub color: Palette,
}

#[derive(Debug, Clone, Copy)]
pub struct SystemOverview {
    pub header: PageHeader<'static>,
    pub systems: &'static [SystemColumn],
    pub banner: Banner,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunnelStage {
    pub stage: &'static str,
    pub share: &'static str,
    /// Bar width in inches
    pub width: f64,
    pub color: Palette,
}

#[derive(Debug, Clone, Copy)]
pub struct FunnelOverview {
    pub header: PageHeader<'static>,
    pub funnel_title: &'static str,
    pub stages: &'static [FunnelStage],
    pub funnel_caption: &'static str,
    pub modules: &'static [Card],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskLevel {
    pub icon: &'static str,
    pub level: &'static str,
    pub count: &'static str,
    pub action: &'static str,
    pub color: Palette,
}

#[derive(Debug, Clone, Copy)]
pub struct RiskDashboard {
    pub header: PageHeader<'static>,
    pub signals_title: &'static str,
    pub signals: &'static [Card],
    pub dashboard_title: &'static str,
    pub levels: &'static [RiskLevel],
    pub footnote: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub color: Palette,
}

#[derive(Debug, Clone, Copy)]
pub struct HeroShowcase {
    pub header: PageHeader<'static>,
    pub heroes: &'static [HeroCard],
    pub features: &'static [Feature],
}

#[derive(Debug, Clone, Copy)]
pub struct ProcessFlow {
    pub header: PageHeader<'static>,
    pub steps: &'static [Card],
    /// Glyph drawn between consecutive steps
    pub arrow: &'static str,
    pub highlights: &'static [AccentCard],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Command {
    pub utterance: &'static str,
    pub outcome: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ChatPanel<T: 'static> {
    pub title: &'static str,
    pub accent: Palette,
    pub items: &'static [T],
    pub footer: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ChatModes {
    pub header: PageHeader<'static>,
    pub operator: ChatPanel<Command>,
    pub parent: ChatPanel<Feature>,
}

#[derive(Debug, Clone, Copy)]
pub struct Comparison {
    pub header: PageHeader<'static>,
    pub columns: &'static [&'static str],
    /// Column widths in inches
    pub widths: &'static [f64],
    pub rows: &'static [&'static [&'static str]],
    /// Column holding our own product
    pub highlight_column: usize,
    pub footer: Banner,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    pub description: &'static str,
    pub color: Palette,
}

#[derive(Debug, Clone, Copy)]
pub struct Architecture {
    pub header: PageHeader<'static>,
    pub layers: &'static [Layer],
    pub advantages: &'static [Card],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub color: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Return {
    pub title: &'static str,
    pub description: &'static str,
    pub result: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CostBenefit {
    pub header: PageHeader<'static>,
    pub stats: &'static [Stat],
    pub ledger_title: &'static str,
    /// The first row is the header
    pub ledger: &'static [&'static [&'static str]],
    /// Trailing ledger rows shown as totals
    pub total_rows: usize,
    pub returns_title: &'static str,
    pub returns: &'static [Return],
}

/// Feature slots that hold this value are shown as unavailable.
pub const NOT_INCLUDED: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub capacity: &'static str,
    pub color: Palette,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Pricing {
    pub header: PageHeader<'static>,
    pub plans: &'static [Plan],
    /// Plan marked with the ribbon
    pub featured: Option<usize>,
    pub ribbon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: Palette,
}

#[derive(Debug, Clone, Copy)]
pub struct Onboarding {
    pub header: PageHeader<'static>,
    pub steps: &'static [Step],
    pub promises: &'static [Feature],
}

pub const COVER: Poster = Poster {
    background: Palette::Dark,
    elements: &[
        Element::Disc {
            x: -1.5,
            y: -2.0,
            diameter: 6.0,
            color: Palette::Dark2,
        },
        Element::Disc {
            x: 9.0,
            y: 4.0,
            diameter: 5.0,
            color: Palette::Dark2,
        },
        Element::TopBar(0.08, Palette::Accent),
        Element::Text(label(area(1.0, 1.2, 11.0, 0.6), "94Cram", 24.0, Palette::Accent).bold()),
        Element::Text(
            label(area(1.0, 2.0, 11.0, 1.2), "智慧補教管理生態系", 54.0, Palette::White).bold(),
        ),
        Element::Text(label(
            area(1.0, 3.3, 11.0, 0.8),
            "三大系統 × AI 驅動 × 一站式解決方案",
            28.0,
            Palette::Light2,
        )),
        Element::Bar(area(1.0, 4.3, 3.0, 0.04), Palette::Accent),
        Element::Text(label(
            area(1.0, 4.6, 8.0, 0.5),
            "學員管理 ｜ 智慧點名 ｜ 庫存管控 ｜ AI 助手 ｜ LINE/Telegram Bot",
            18.0,
            Palette::Light2,
        )),
        Element::Text(label(area(1.0, 5.5, 5.0, 0.4), "2026 產品介紹", 16.0, Palette::TextLight)),
        Element::Panel(area(9.5, 5.5, 3.0, 1.3), Palette::Primary),
        Element::Text(
            label(area(9.5, 5.7, 3.0, 0.4), "免費試用 30 天", 20.0, Palette::White)
                .bold()
                .centered(),
        ),
        Element::Text(
            label(area(9.5, 6.15, 3.0, 0.3), "零硬體投資 · 即開即用", 14.0, Palette::Light2)
                .centered(),
        ),
    ],
};

pub const PAIN_POINTS: AccentCardGrid = AccentCardGrid {
    header: light("補習班經營的六大痛點", "您是否正在面對這些挑戰？"),
    cards: &[
        accent_card(
            "😰",
            "學員管理混亂",
            "紙本名冊、Excel 表格散落各處\n學員資料不統一，查詢耗時",
            Palette::Red,
        ),
        accent_card(
            "📋",
            "點名效率低落",
            "每堂課手動點名浪費 5-10 分鐘\n家長無法即時知道孩子出席狀況",
            Palette::Accent,
        ),
        accent_card(
            "💸",
            "收費漏洞百出",
            "繳費記錄靠人工，漏收時有所聞\n催款困難，應收帳款追蹤困難",
            Palette::Accent2,
        ),
        accent_card(
            "📦",
            "教材管理失控",
            "講義庫存靠感覺，常缺貨或囤積\n各校區教材流向不透明",
            Palette::Primary,
        ),
        accent_card(
            "🚪",
            "學員流失無感",
            "學員流失才發現為時已晚\n缺乏預警機制，流失原因難追蹤",
            Palette::Red,
        ),
        accent_card(
            "🔐",
            "資料安全堪憂",
            "重要資料存在本機硬碟\n沒有備份，電腦一壞全部歸零",
            Palette::Dark2,
        ),
    ],
};

pub const SOLUTION: SystemOverview = SystemOverview {
    header: light("94Cram 一站式解決方案", "三大系統 + AI 助手，完整覆蓋補習班營運需求"),
    systems: &[
        SystemColumn {
            badge: "管",
            name: "94Manage",
            tagline: "學員管理系統",
            features: "學員資料 · 課程管理 · 招生漏斗\n收費帳務 · 薪資管理 · AI 流失預警\n成績追蹤 · 知識庫 · 報表分析",
            color: Palette::Primary,
        },
        SystemColumn {
            badge: "名",
            name: "94inClass",
            tagline: "智慧點名系統",
            features: "NFC 刷卡點名（1秒完成）\nAI 臉部辨識 · 即時家長通知\n出勤統計 · 請假管理 · 成績管理\n課表排程 · 繳費管理",
            color: Palette::Secondary,
        },
        SystemColumn {
            badge: "庫",
            name: "94Stock",
            tagline: "庫存管理系統",
            features: "多倉庫管理 · 條碼掃描\n進出貨追蹤 · 低庫存預警\n採購訂單流程 · 供應商管理\n盤點作業 · AI 備貨預測",
            color: Palette::Accent,
        },
    ],
    banner: Banner {
        headline: "🤖  AI 驅動核心：頂尖大型語言模型 + 智慧知識引擎 + 自然語言操作 + 智慧預測",
        caption: "Telegram / LINE 聊天即操作，家長學員零門檻使用",
    },
};

pub const MANAGE: FunnelOverview = FunnelOverview {
    header: light("94Manage — 學員管理系統", "從招生到畢業，全生命週期管理"),
    funnel_title: "🎯 招生漏斗 & 智慧分析",
    stages: &[
        FunnelStage {
            stage: "新諮詢",
            share: "100%",
            width: 5.0,
            color: Palette::Primary,
        },
        FunnelStage {
            stage: "已聯絡",
            share: "75%",
            width: 4.3,
            color: Palette::Secondary,
        },
        FunnelStage {
            stage: "預約試聽",
            share: "50%",
            width: 3.6,
            color: Palette::Accent,
        },
        FunnelStage {
            stage: "完成試聽",
            share: "35%",
            width: 2.9,
            color: Palette::Accent2,
        },
        FunnelStage {
            stage: "正式報名",
            share: "25%",
            width: 2.2,
            color: Palette::GreenCheck,
        },
    ],
    funnel_caption: "自動追蹤每階段轉換率 · 顧問績效排名 · 預期營收計算",
    modules: &[
        card("👨‍🎓", "學員管理", "資料建檔 · 狀態追蹤 · 批量匯入"),
        card("📚", "課程管理", "五種收費模式 · 動態費率調整"),
        card("💰", "帳務系統", "繳費追蹤 · AI 自動發票 · 逾期提醒"),
        card("💼", "薪資管理", "自動計算 · 時薪/獎金 · 薪資單"),
        card("📊", "成績分析", "成績登錄 · 趨勢圖表 · 進步追蹤"),
        card("📄", "AI 報表", "分校報告自動生成 · 學員詳細報告"),
    ],
};

pub const CHURN_ALERT: RiskDashboard = RiskDashboard {
    header: light("🧠 AI 流失預警系統", "業界首創：在學員流失前主動預警"),
    signals_title: "多維度智慧分析",
    signals: &[
        card("📉", "出勤率下降", "連續缺課或出勤率低於班級平均"),
        card("💳", "繳費延遲", "逾期繳費或拖延天數增加"),
        card("📊", "成績下降", "連續退步或大幅落後"),
        card("🔕", "互動減少", "課堂參與度降低"),
        card("📅", "請假頻繁", "請假次數異常增加"),
    ],
    dashboard_title: "風險儀表板",
    levels: &[
        RiskLevel {
            icon: "🔴",
            level: "高風險",
            count: "3 名學員",
            action: "立即聯繫 · 安排面談 · 提供優惠",
            color: Palette::Red,
        },
        RiskLevel {
            icon: "🟡",
            level: "中風險",
            count: "8 名學員",
            action: "加強關懷 · 追蹤狀態 · 觀察趨勢",
            color: Palette::Gold,
        },
        RiskLevel {
            icon: "🟢",
            level: "低風險",
            count: "45 名學員",
            action: "維持現狀 · 定期關懷",
            color: Palette::GreenCheck,
        },
    ],
    footnote: "⚡ 每日自動掃描 · 準確率 92% · 提前 2-4 週預警",
};

pub const ATTENDANCE: HeroShowcase = HeroShowcase {
    header: light("94inClass — 智慧點名系統", "1 秒完成點名，家長即時收到通知"),
    heroes: &[
        HeroCard {
            icon: "📱",
            title: "NFC 感應點名",
            tagline: "刷卡即到 · 1 秒完成",
            description: "市售 NFC 讀卡機 NT$300 即可\n支援所有 NFC 卡片\n零學習成本",
            color: Palette::Primary,
        },
        HeroCard {
            icon: "🤖",
            title: "AI 臉部辨識",
            tagline: "走進教室自動辨識",
            description: "使用一般網路攝影機\n防代簽驗證\n科技感十足",
            color: Palette::Secondary,
        },
        HeroCard {
            icon: "💬",
            title: "即時家長通知",
            tagline: "LINE 推播零延遲",
            description: "到校即通知家長\n遲到/缺席自動推播\n每日出勤摘要",
            color: Palette::Accent,
        },
    ],
    features: &[
        feature("📊 出勤統計", "日/週/月報表\n出勤率分析"),
        feature("📝 請假管理", "線上請假申請\n額度追蹤"),
        feature("📅 課表管理", "教室 · 老師 · 時段\n排程管理"),
        feature("💳 繳費管理", "多元週期 · 狀態追蹤\n批次登錄"),
        feature("📄 成績管理", "成績登錄 · 統計\n排名 · 進步追蹤"),
    ],
};

pub const INVENTORY: ProcessFlow = ProcessFlow {
    header: light("94Stock — 庫存管理系統", "教材管理數位化，再也不怕講義缺貨"),
    steps: &[
        card("📦", "進貨", "採購收貨\n條碼掃描\n自動入帳"),
        card("🏢", "倉儲", "多倉庫管理\n即時庫存\n安全存量"),
        card("📤", "出貨", "班級領用\n銷售出貨\n簽收記錄"),
        card("🔄", "轉庫", "校區間轉移\n雙邊自動帳\n交易記錄"),
    ],
    arrow: "→",
    highlights: &[
        accent_card(
            "🔔",
            "低庫存預警",
            "Telegram 即時推播\n低於安全存量自動通知",
            Palette::Red,
        ),
        accent_card(
            "📋",
            "採購訂單流程",
            "草稿→審核→核准→收貨\n完整審批流程",
            Palette::Primary,
        ),
        accent_card(
            "📊",
            "盤點管理",
            "建立盤點單 · 掃描盤點\n差異自動調整",
            Palette::Secondary,
        ),
        accent_card(
            "🤖",
            "AI 備貨預測",
            "基於歷史數據\n自動建議補貨量",
            Palette::Accent,
        ),
    ],
};

pub const CHAT_BOT: ChatModes = ChatModes {
    header: dark(
        "🤖 AI 智慧機器人",
        "用「說話」管理補習班 — Telegram / LINE 自然語言操作",
    ),
    operator: ChatPanel {
        title: "👔 管理員模式（Telegram）",
        accent: Palette::Accent,
        items: &[
            Command {
                utterance: "「陳小明請假」",
                outcome: "→ 自動記錄請假申請",
            },
            Command {
                utterance: "「高二班繳 5000 元」",
                outcome: "→ 自動建立繳費紀錄",
            },
            Command {
                utterance: "「203 號講義剩幾本」",
                outcome: "→ 即時查詢庫存數量",
            },
            Command {
                utterance: "「今天出勤率多少」",
                outcome: "→ 顯示當日出勤統計",
            },
            Command {
                utterance: "「本月營收報表」",
                outcome: "→ 產生收入分析報告",
            },
            Command {
                utterance: "「切換到中壢分校」",
                outcome: "→ 切換操作分校",
            },
        ],
        footer: "🔒  寫入操作二次確認 · 防誤操作設計",
    },
    parent: ChatPanel {
        title: "👨‍👩‍👧 家長模式（Telegram / LINE）",
        accent: Palette::Secondary,
        items: &[
            feature("綁定驗證", "孩子姓名 + 電話末 4 碼\n簡單安全的身份驗證"),
            feature("出勤查詢", "「小明今天有到嗎？」\n即時回覆到校狀態"),
            feature("成績查詢", "「小明最近考試成績」\n自動顯示成績與排名"),
            feature("費用查詢", "「小明學費繳清了嗎？」\n顯示繳費狀態與明細"),
            feature("課表查詢", "「小明這週上課時間」\n完整課表一目瞭然"),
        ],
        footer: "💡  零學習成本 · 用對話就能查詢一切",
    },
};

pub const COMPETITORS: Comparison = Comparison {
    header: light("競品比較分析", "為什麼 94Cram 是最佳選擇？"),
    columns: &[
        "功能比較",
        "94Cram\n智慧補教",
        "傳統補教\nERP",
        "Excel\n人工管理",
        "其他 SaaS\n管理系統",
    ],
    widths: &[3.0, 2.3, 2.3, 2.3, 2.3],
    rows: &[
        &["學員管理", "✓", "✓", "△", "✓"],
        &["智慧點名 (NFC/臉辨)", "✓", "✗", "✗", "△"],
        &["AI 流失預警", "✓", "✗", "✗", "✗"],
        &["庫存管理", "✓", "△", "✗", "✗"],
        &["LINE/Telegram Bot", "✓", "✗", "✗", "✗"],
        &["AI 自然語言操作", "✓", "✗", "✗", "✗"],
        &["家長即時通知", "✓", "△", "✗", "△"],
        &["多分校支援", "✓", "✓", "✗", "△"],
        &["雲端 SaaS（免硬體）", "✓", "✗", "—", "✓"],
        &["AI 備貨預測", "✓", "✗", "✗", "✗"],
        &["月費 (參考)", "NT$2,999 起", "NT$10,000+", "免費", "NT$5,000+"],
        &["建置費", "0 元", "10~50 萬", "0 元", "0~5 萬"],
    ],
    highlight_column: 1,
    footer: Banner {
        headline: "💡 94Cram 是市場上唯一整合「學員管理 + 點名 + 庫存 + AI + Bot」的補教管理系統",
        caption: "其他系統至少需要 3-4 套軟體才能達到相同效果，且無 AI 智慧功能",
    },
};

pub const TECHNOLOGY: Architecture = Architecture {
    header: light("技術架構優勢", "企業級雲端架構，補習班級的價格"),
    layers: &[
        Layer {
            name: "使用者端",
            description: "Web 瀏覽器 · LINE · Telegram · 手機",
            color: Palette::Primary,
        },
        Layer {
            name: "前端層",
            description: "新一代響應式框架 · 強型別全棧開發 · 伺服器端渲染加速",
            color: Palette::Secondary,
        },
        Layer {
            name: "API 層",
            description: "軍規級身份認證 · 角色權限管控 · 資料驗證防護 · 標準化介面",
            color: Palette::Accent,
        },
        Layer {
            name: "AI 層",
            description: "最新一代大型語言模型 · 智慧知識引擎 · 語意向量檢索 · 意圖理解",
            color: Palette::Accent2,
        },
        Layer {
            name: "資料層",
            description: "企業級關聯式資料庫 · 型別安全 ORM · 多租戶隔離 · 審計日誌",
            color: Palette::Dark2,
        },
        Layer {
            name: "基礎設施",
            description: "頂級雲端無伺服器架構 · 託管式資料庫 · 自動擴縮 · 零停機部署",
            color: Palette::Primary,
        },
    ],
    advantages: &[
        card("⚡", "更新零停機", "雙軌熱切換部署\n更新系統完全不影響使用"),
        card("🔒", "企業級安全", "軍規級認證 + 角色權限\n每筆操作可追蹤"),
        card("📈", "自動擴縮", "尖峰時段自動擴展\n離峰自動縮減省錢"),
        card("🌏", "台灣機房", "國際頂級雲端台灣區\n延遲 < 50ms 超快速"),
        card("💾", "自動備份", "每日自動備份\n資料永不遺失"),
        card("🔐", "資料隔離", "多租戶架構\n每家補習班資料獨立"),
    ],
};

pub const SECURITY: CardGrid = CardGrid {
    header: dark("🔐 安全與合規", "補教業最嚴謹的資安標準"),
    cards: &[
        card("🔑", "軍規級認證 + SSO", "三系統單一登入\n一組帳號通用全平台\n自動逾時登出"),
        card("👥", "RBAC 角色權限", "6 種角色細粒度控管\n資源級存取控制\n每個人只看到該看的"),
        card("📝", "完整審計日誌", "所有操作留下紀錄\n何人何時改了什麼\nIP 來源追蹤"),
        card("🏠", "多租戶隔離", "每家補習班資料獨立\n互不干擾、不外洩\n嚴格 tenantId 驗證"),
        card("☁️", "頂級雲端防護", "SSL/TLS 加密傳輸\n台灣機房資料主權\n定期自動備份"),
        card("🛡️", "個資保護", "符合個資法規範\n敏感資料加密存儲\n環境變數管理密鑰"),
    ],
};

pub const COST_BENEFIT: CostBenefit = CostBenefit {
    header: light("成本效益分析", "最低成本，最高效率"),
    stats: &[
        Stat {
            number: "NT$0",
            label: "建置費",
            color: Palette::GreenCheck,
        },
        Stat {
            number: "NT$300",
            label: "NFC 讀卡機",
            color: Palette::Primary,
        },
        Stat {
            number: "30 天",
            label: "免費試用",
            color: Palette::Accent,
        },
        Stat {
            number: "99.95%",
            label: "系統可用性",
            color: Palette::Secondary,
        },
    ],
    ledger_title: "💰 3 年總成本比較（TCO）",
    ledger: &[
        &["項目", "94Cram", "傳統系統"],
        &["建置費", "NT$0", "NT$100,000+"],
        &["硬體採購", "NT$300", "NT$50,000+"],
        &["年度授權", "NT$35,988", "NT$120,000"],
        &["維護費用", "NT$0", "NT$30,000/年"],
        &["3 年總計", "NT$108,264", "NT$430,000+"],
        &["節省", "— —", "75%↓"],
    ],
    total_rows: 2,
    returns_title: "📈 導入效益",
    returns: &[
        Return {
            title: "每堂省 5 分鐘",
            description: "智慧點名取代手動點名",
            result: "每月省 10+ 小時",
        },
        Return {
            title: "學員流失率降低",
            description: "AI 預警提前 2-4 週通知",
            result: "留住 15% 潛在流失學員",
        },
        Return {
            title: "收費零遺漏",
            description: "自動追蹤每筆繳費",
            result: "每月多收 NT$5,000+",
        },
        Return {
            title: "教材零浪費",
            description: "AI 備貨預測精準採購",
            result: "減少 20% 囤積浪費",
        },
        Return {
            title: "招生轉換率提升",
            description: "漏斗分析優化招生流程",
            result: "轉換率提升 30%",
        },
    ],
};

pub const PLANS: Pricing = Pricing {
    header: light("服務方案", "彈性選擇，隨需擴展"),
    plans: &[
        Plan {
            name: "入門版",
            price: "NT$2,999/月",
            capacity: "50 學員以下",
            color: Palette::Secondary,
            features: &[
                "94Manage 學員管理",
                "基本課程管理",
                "繳費記錄",
                "成績管理",
                "Email 支援",
                NOT_INCLUDED,
                NOT_INCLUDED,
                NOT_INCLUDED,
            ],
        },
        Plan {
            name: "標準版",
            price: "NT$5,999/月",
            capacity: "200 學員以下",
            color: Palette::Primary,
            features: &[
                "全部入門版功能",
                "94inClass 點名系統",
                "NFC + 手動點名",
                "LINE 家長通知",
                "出勤報表",
                "AI 流失預警",
                "優先支援",
                NOT_INCLUDED,
            ],
        },
        Plan {
            name: "專業版",
            price: "NT$8,999/月",
            capacity: "500 學員以下",
            color: Palette::Accent,
            features: &[
                "全部標準版功能",
                "94Stock 庫存管理",
                "AI 臉辨點名",
                "Telegram Bot 操作",
                "AI 備貨預測",
                "多分校支援",
                "專屬客服",
                "API 整合",
            ],
        },
    ],
    featured: Some(1),
    ribbon: "⭐ 最受歡迎",
};

pub const ONBOARDING: Onboarding = Onboarding {
    header: light("輕鬆導入流程", "4 步驟，最快當天開始使用"),
    steps: &[
        Step {
            number: "1",
            title: "免費諮詢",
            description: "了解您的需求\n推薦適合方案",
            color: Palette::Primary,
        },
        Step {
            number: "2",
            title: "帳號開通",
            description: "30 分鐘完成設定\n匯入現有學員資料",
            color: Palette::Secondary,
        },
        Step {
            number: "3",
            title: "教育訓練",
            description: "1 小時快速上手\n提供操作手冊",
            color: Palette::Accent,
        },
        Step {
            number: "4",
            title: "正式啟用",
            description: "30 天免費試用\n隨時都有支援",
            color: Palette::Accent2,
        },
    ],
    promises: &[
        feature("✓ 免費資料轉移", "舊系統資料完整匯入"),
        feature("✓ 免費教育訓練", "保證所有員工會操作"),
        feature("✓ 30 天無條件退費", "不滿意隨時取消"),
        feature("✓ 24hr 技術支援", "問題隨時幫您解決"),
    ],
};

pub const CLOSING: Poster = Poster {
    background: Palette::Dark,
    elements: &[
        Element::Disc {
            x: -2.0,
            y: -2.0,
            diameter: 7.0,
            color: Palette::Dark2,
        },
        Element::Disc {
            x: 10.0,
            y: 4.0,
            diameter: 6.0,
            color: Palette::Dark2,
        },
        Element::TopBar(0.08, Palette::Accent),
        Element::Text(label(
            area(1.0, 1.5, 11.0, 0.5),
            "準備好升級您的補習班了嗎？",
            20.0,
            Palette::Light2,
        )),
        Element::Text(
            label(
                area(1.0, 2.2, 11.0, 1.0),
                "讓 94Cram 成為您最強大的經營武器",
                46.0,
                Palette::White,
            )
            .bold(),
        ),
        Element::Bar(area(1.0, 3.5, 3.0, 0.04), Palette::Accent),
        Element::Text(label(area(1.2, 4.0, 0.4, 0.4), "🌐", 18.0, Palette::TextDark)),
        Element::Text(label(area(1.8, 4.02, 5.0, 0.4), "94cram.app", 18.0, Palette::Light2)),
        Element::Text(label(area(1.2, 4.55, 0.4, 0.4), "📧", 18.0, Palette::TextDark)),
        Element::Text(label(
            area(1.8, 4.57, 5.0, 0.4),
            "contact@94cram.app",
            18.0,
            Palette::Light2,
        )),
        Element::Text(label(area(1.2, 5.1, 0.4, 0.4), "📱", 18.0, Palette::TextDark)),
        Element::Text(label(
            area(1.8, 5.12, 5.0, 0.4),
            "LINE 官方帳號 @94cram",
            18.0,
            Palette::Light2,
        )),
        Element::Text(label(area(1.2, 5.65, 0.4, 0.4), "💬", 18.0, Palette::TextDark)),
        Element::Text(label(
            area(1.8, 5.67, 5.0, 0.4),
            "Telegram @bot94cram",
            18.0,
            Palette::Light2,
        )),
        Element::Panel(area(8.0, 3.8, 4.5, 1.5), Palette::Accent),
        Element::Text(
            label(area(8.0, 4.0, 4.5, 0.5), "立即免費試用", 28.0, Palette::White)
                .bold()
                .centered(),
        ),
        Element::Text(
            label(area(8.0, 4.5, 4.5, 0.4), "30 天完整體驗 · 零風險", 16.0, Palette::Light2)
                .centered(),
        ),
        Element::Panel(area(8.0, 5.5, 4.5, 1.0), Palette::Primary),
        Element::Text(
            label(area(8.0, 5.6, 4.5, 0.5), "預約 Demo 演示", 24.0, Palette::White)
                .bold()
                .centered(),
        ),
        Element::Text(
            label(area(8.0, 6.05, 4.5, 0.35), "專人為您展示完整功能", 14.0, Palette::Light2)
                .centered(),
        ),
        Element::Text(
            label(
                area(0.0, 6.8, 13.333, 0.4),
                "© 2026 94Cram 智慧補教管理系統  |  三大系統 × AI 驅動 × 一站式解決方案",
                12.0,
                Palette::TextLight,
            )
            .centered(),
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_builders() {
        let text = label(area(1.0, 2.0, 3.0, 0.5), "94Cram", 24.0, Palette::Accent)
            .bold()
            .centered();
        assert!(text.bold);
        assert_eq!(text.alignment, Alignment::Center);
        assert_eq!(text.area.origin(), Point::inches(1.0, 2.0));
        assert_eq!(text.style().color, Palette::Accent.color());
    }

    #[test]
    fn test_cover_brand_is_first_text() {
        let first = COVER.elements.iter().find_map(|element| match element {
            Element::Text(label) => Some(label.text),
            _ => None,
        });
        assert_eq!(first, Some("94Cram"));
    }

    #[test]
    fn test_comparison_rows_match_columns() {
        for row in COMPETITORS.rows {
            assert_eq!(row.len(), COMPETITORS.columns.len());
        }
        assert_eq!(COMPETITORS.widths.len(), COMPETITORS.columns.len());
    }

    #[test]
    fn test_plans_have_equal_feature_slots() {
        for plan in PLANS.plans {
            assert_eq!(plan.features.len(), 8);
        }
        assert!(PLANS.featured.is_some_and(|i| i < PLANS.plans.len()));
    }

    #[test]
    fn test_ledger_rows() {
        assert!(COST_BENEFIT.ledger.iter().all(|row| row.len() == 3));
        assert!(COST_BENEFIT.total_rows < COST_BENEFIT.ledger.len());
    }

    #[test]
    fn test_headers_carry_brand() {
        for header in [PAIN_POINTS.header, CHAT_BOT.header, SECURITY.header] {
            assert_eq!(header.brand, BRAND);
        }
        assert_eq!(CHAT_BOT.header.theme, HeaderTheme::Dark);
    }
}
