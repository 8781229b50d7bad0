use crate::document::Document;
use crate::error::Result;
use crate::objects::{Dictionary, Object, ObjectId, Stream};
use crate::page::{alpha_state_name, Page};
use crate::text::{literal_string, Font};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Object numbers for everything one document writes.
///
/// Numbers are handed out in writing order: catalog, page tree, shared font
/// objects, then a page/content pair per page, and the info dictionary last.
struct ObjectLayout {
    catalog: ObjectId,
    pages: ObjectId,
    fonts: BTreeMap<Font, ObjectId>,
    page_objects: Vec<(ObjectId, ObjectId)>,
    info: ObjectId,
}

impl ObjectLayout {
    fn new(document: &Document) -> Self {
        let mut next = 1;
        let mut allocate = |count: u32| {
            let id = ObjectId::new(next, 0);
            next += count;
            id
        };

        let catalog = allocate(1);
        let pages = allocate(1);

        let used: BTreeSet<Font> = document.pages.iter().flat_map(Page::fonts_used).collect();
        let fonts = used
            .into_iter()
            .map(|font| {
                // Type0 font, descendant CIDFont, font descriptor
                let count = if font.is_cid() { 3 } else { 1 };
                (font, allocate(count))
            })
            .collect();

        let page_objects = document
            .pages
            .iter()
            .map(|_| {
                let page = allocate(1);
                let content = allocate(1);
                (page, content)
            })
            .collect();

        let info = allocate(1);

        Self {
            catalog,
            pages,
            fonts,
            page_objects,
            info,
        }
    }
}

pub struct PdfWriter<W: Write> {
    writer: W,
    xref_positions: BTreeMap<ObjectId, u64>,
    current_position: u64,
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self {
            writer,
            xref_positions: BTreeMap::new(),
            current_position: 0,
        }
    }

    /// Bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.current_position
    }

    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        let layout = ObjectLayout::new(document);

        self.write_header()?;
        self.write_catalog(layout.catalog, layout.pages)?;
        self.write_page_tree(&layout)?;
        self.write_fonts(&layout.fonts)?;

        for (index, (page, &(page_id, content_id))) in
            document.pages.iter().zip(&layout.page_objects).enumerate()
        {
            self.write_page(page_id, content_id, layout.pages, &layout.fonts, page)?;
            let start = self.current_position;
            self.write_page_content(content_id, page, document.compress())?;
            debug!(
                page = index + 1,
                shapes = page.shapes().len(),
                bytes = self.current_position - start,
                "wrote page"
            );
        }

        self.write_info(layout.info, document)?;

        let xref_position = self.current_position;
        self.write_xref()?;
        self.write_trailer(&layout, document, xref_position)?;

        self.writer.flush()?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_bytes(format!("%PDF-{}\n", crate::PDF_VERSION).as_bytes())?;
        // Binary comment to ensure file is treated as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    fn write_catalog(&mut self, catalog_id: ObjectId, pages_id: ObjectId) -> Result<()> {
        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::name("Catalog"));
        catalog.set("Pages", pages_id);

        self.write_object(catalog_id, &Object::Dictionary(catalog))
    }

    fn write_page_tree(&mut self, layout: &ObjectLayout) -> Result<()> {
        let kids = layout
            .page_objects
            .iter()
            .map(|(page_id, _)| Object::Reference(*page_id))
            .collect::<Vec<_>>();

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::name("Pages"));
        pages_dict.set("Count", layout.page_objects.len());
        pages_dict.set("Kids", kids);

        self.write_object(layout.pages, &Object::Dictionary(pages_dict))
    }

    fn write_fonts(&mut self, fonts: &BTreeMap<Font, ObjectId>) -> Result<()> {
        for (font, id) in fonts {
            if font.is_cid() {
                self.write_cid_font(*font, *id)?;
            } else {
                let mut dict = Dictionary::new();
                dict.set("Type", Object::name("Font"));
                dict.set("Subtype", Object::name("Type1"));
                dict.set("BaseFont", Object::name(font.pdf_name()));
                dict.set("Encoding", Object::name("WinAnsiEncoding"));
                self.write_object(*id, &Object::Dictionary(dict))?;
            }
        }
        Ok(())
    }

    /// Type0 font over a non-embedded Adobe-CNS1 CIDFont.
    fn write_cid_font(&mut self, font: Font, id: ObjectId) -> Result<()> {
        let descendant_id = ObjectId::new(id.number() + 1, 0);
        let descriptor_id = ObjectId::new(id.number() + 2, 0);

        let mut type0 = Dictionary::new();
        type0.set("Type", Object::name("Font"));
        type0.set("Subtype", Object::name("Type0"));
        type0.set(
            "BaseFont",
            Object::name(format!("{}-{}", font.pdf_name(), CID_ENCODING)),
        );
        type0.set("Encoding", Object::name(CID_ENCODING));
        type0.set("DescendantFonts", vec![Object::Reference(descendant_id)]);
        self.write_object(id, &Object::Dictionary(type0))?;

        let mut system_info = Dictionary::new();
        system_info.set("Registry", "Adobe");
        system_info.set("Ordering", "CNS1");
        system_info.set("Supplement", 4);

        let mut cid_font = Dictionary::new();
        cid_font.set("Type", Object::name("Font"));
        cid_font.set("Subtype", Object::name("CIDFontType0"));
        cid_font.set("BaseFont", Object::name(font.pdf_name()));
        cid_font.set("CIDSystemInfo", system_info);
        cid_font.set("FontDescriptor", descriptor_id);
        cid_font.set("DW", 1000);
        self.write_object(descendant_id, &Object::Dictionary(cid_font))?;

        let mut descriptor = Dictionary::new();
        descriptor.set("Type", Object::name("FontDescriptor"));
        descriptor.set("FontName", Object::name(font.pdf_name()));
        descriptor.set("Flags", 6);
        descriptor.set(
            "FontBBox",
            vec![
                Object::Integer(-160),
                Object::Integer(-249),
                Object::Integer(1015),
                Object::Integer(1071),
            ],
        );
        descriptor.set("ItalicAngle", 0);
        descriptor.set("Ascent", 880);
        descriptor.set("Descent", -120);
        descriptor.set("CapHeight", 880);
        descriptor.set("StemV", 93);
        self.write_object(descriptor_id, &Object::Dictionary(descriptor))
    }

    fn write_page(
        &mut self,
        page_id: ObjectId,
        content_id: ObjectId,
        parent_id: ObjectId,
        fonts: &BTreeMap<Font, ObjectId>,
        page: &Page,
    ) -> Result<()> {
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::name("Page"));
        page_dict.set("Parent", parent_id);
        page_dict.set(
            "MediaBox",
            vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width()),
                Object::Real(page.height()),
            ],
        );

        let mut resources = Dictionary::new();

        let mut font_dict = Dictionary::new();
        for font in page.fonts_used() {
            if let Some(id) = fonts.get(&font) {
                font_dict.set(font.resource_name(), *id);
            }
        }
        if !font_dict.is_empty() {
            resources.set("Font", font_dict);
        }

        let alpha_levels = page.alpha_levels();
        if !alpha_levels.is_empty() {
            let mut states = Dictionary::new();
            for percent in alpha_levels {
                let mut state = Dictionary::new();
                state.set("Type", Object::name("ExtGState"));
                state.set("ca", percent as f64 / 100.0);
                states.set(alpha_state_name(percent), state);
            }
            resources.set("ExtGState", states);
        }

        page_dict.set("Resources", resources);
        page_dict.set("Contents", content_id);

        self.write_object(page_id, &Object::Dictionary(page_dict))
    }

    fn write_page_content(
        &mut self,
        content_id: ObjectId,
        page: &Page,
        compress: bool,
    ) -> Result<()> {
        #[cfg_attr(not(feature = "compression"), allow(unused_mut))]
        let mut stream = Stream::new(page.generate_content());

        #[cfg(feature = "compression")]
        {
            if compress {
                stream.compress_flate()?;
            }
        }
        #[cfg(not(feature = "compression"))]
        let _ = compress;

        self.write_stream(content_id, &stream)
    }

    fn write_info(&mut self, info_id: ObjectId, document: &Document) -> Result<()> {
        let metadata = &document.metadata;
        let mut info_dict = Dictionary::new();

        let fields = [
            ("Title", &metadata.title),
            ("Author", &metadata.author),
            ("Subject", &metadata.subject),
            ("Keywords", &metadata.keywords),
            ("Creator", &metadata.creator),
            ("Producer", &metadata.producer),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                info_dict.set(key, Object::text_string(value));
            }
        }

        if let Some(creation_date) = metadata.creation_date {
            info_dict.set("CreationDate", format_pdf_date(creation_date));
        }
        if let Some(mod_date) = metadata.modification_date {
            info_dict.set("ModDate", format_pdf_date(mod_date));
        }

        self.write_object(info_id, &Object::Dictionary(info_dict))
    }
}

impl PdfWriter<BufWriter<std::fs::File>> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self::new_with_writer(BufWriter::new(file)))
    }
}

/// CMap for UTF-16BE codes against Adobe-CNS1.
const CID_ENCODING: &str = "UniCNS-UTF16-H";

impl<W: Write> PdfWriter<W> {
    fn write_object(&mut self, id: ObjectId, object: &Object) -> Result<()> {
        self.begin_object(id)?;
        self.write_object_value(object)?;
        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_stream(&mut self, id: ObjectId, stream: &Stream) -> Result<()> {
        self.begin_object(id)?;
        self.write_object_value(&Object::Dictionary(stream.dictionary().clone()))?;
        self.write_bytes(b"\nstream\n")?;
        self.write_bytes(stream.data())?;
        self.write_bytes(b"\nendstream\nendobj\n")?;
        Ok(())
    }

    fn begin_object(&mut self, id: ObjectId) -> Result<()> {
        self.xref_positions.insert(id, self.current_position);
        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Null => self.write_bytes(b"null")?,
            Object::Boolean(b) => self.write_bytes(if *b { b"true" } else { b"false" })?,
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(format_real(*f).as_bytes())?,
            Object::String(s) => self.write_bytes(literal_string(s).as_bytes())?,
            Object::HexString(bytes) => {
                let hex: String = bytes.iter().map(|b| format!("{b:02X}")).collect();
                self.write_bytes(b"<")?;
                self.write_bytes(hex.as_bytes())?;
                self.write_bytes(b">")?;
            }
            Object::Name(n) => {
                self.write_bytes(b"/")?;
                self.write_bytes(n.as_bytes())?;
            }
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => {
                self.write_bytes(b"<<")?;
                for (key, value) in dict.iter() {
                    self.write_bytes(b"\n/")?;
                    self.write_bytes(key.as_bytes())?;
                    self.write_bytes(b" ")?;
                    self.write_object_value(value)?;
                }
                self.write_bytes(b"\n>>")?;
            }
            Object::Reference(id) => self.write_bytes(id.to_string().as_bytes())?,
        }
        Ok(())
    }

    fn write_xref(&mut self) -> Result<()> {
        self.write_bytes(b"xref\n")?;

        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        self.write_bytes(format!("0 {}\n", max_obj_num + 1).as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;

        // Object numbers are dense, but gaps would still get a free entry
        for obj_num in 1..=max_obj_num {
            let entry = match self.xref_positions.get(&ObjectId::new(obj_num, 0)) {
                Some(position) => format!("{position:010} 00000 n \n"),
                None => "0000000000 00000 f \n".to_string(),
            };
            self.write_bytes(entry.as_bytes())?;
        }

        Ok(())
    }

    fn write_trailer(
        &mut self,
        layout: &ObjectLayout,
        document: &Document,
        xref_position: u64,
    ) -> Result<()> {
        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        let file_id = document_id(document);

        let mut trailer = Dictionary::new();
        trailer.set("Size", (max_obj_num + 1) as i64);
        trailer.set("Root", layout.catalog);
        trailer.set("Info", layout.info);
        trailer.set(
            "ID",
            vec![
                Object::HexString(file_id.clone()),
                Object::HexString(file_id),
            ],
        );

        self.write_bytes(b"trailer\n")?;
        self.write_object_value(&Object::Dictionary(trailer))?;
        self.write_bytes(b"\nstartxref\n")?;
        self.write_bytes(xref_position.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;

        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

/// File identifier derived from the title, page count and creation date, so
/// identical input yields an identical file.
fn document_id(document: &Document) -> Vec<u8> {
    let metadata = &document.metadata;
    let mut seed = String::new();
    seed.push_str(metadata.title.as_deref().unwrap_or_default());
    seed.push_str(&document.page_count().to_string());
    if let Some(date) = metadata.creation_date {
        seed.push_str(&format_pdf_date(date));
    }
    md5::compute(seed.as_bytes()).to_vec()
}

/// Shortest fixed-point form, at most 6 decimals.
fn format_real(value: f64) -> String {
    let formatted = format!("{value:.6}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Format a DateTime as a PDF date string (D:YYYYMMDDHHmmSSOHH'mm)
fn format_pdf_date(date: DateTime<Utc>) -> String {
    let formatted = date.format("D:%Y%m%d%H%M%S");

    // For UTC, the offset is always +00'00
    format!("{formatted}+00'00")
}
