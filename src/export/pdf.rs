//! Minimal multi-page table writer on top of `pdf-writer`.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A4 portrait, in points.
const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 50.0;
const ROW_H: f32 = 20.0;

const FONT_SIZE: f32 = 10.0;
const HEADER_FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 16.0;

/// Approximate Helvetica advance per character, as a fraction of font size.
const CHAR_ADVANCE: f32 = 0.55;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a page and write its content stream.
    fn add_page(&mut self, content: Content) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        self.pdf.stream(content_id, &content.finish());
    }

    /// Table spread over as many pages as needed, header row repeated on each.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let table_w: f32 = col_widths.iter().sum();
        let x0 = (PAGE_W - table_w) / 2.0;

        let per_page = (((PAGE_H - 2.0 * MARGIN - 40.0) / ROW_H) as usize).saturating_sub(1).max(1);
        let total_pages = rows.len().div_ceil(per_page).max(1);

        for page_idx in 0..total_pages {
            let start = page_idx * per_page;
            let chunk = &rows[start.min(rows.len())..(start + per_page).min(rows.len())];

            let mut content = Content::new();
            if page_idx == 0 {
                draw_centered(&mut content, PAGE_H - MARGIN, TITLE_FONT_SIZE, title);
            }
            let footer = format!("Page {} of {}", page_idx + 1, total_pages);
            draw_text(&mut content, PAGE_W - MARGIN - text_width(&footer, FONT_SIZE), MARGIN - 25.0, FONT_SIZE, &footer);

            let mut y = PAGE_H - MARGIN - 40.0;
            fill_band(&mut content, x0, y, table_w, (0.31, 0.27, 0.90));
            draw_row(&mut content, y, &col_widths, x0, &header_row, HEADER_FONT_SIZE, true);

            for (i, row) in chunk.iter().enumerate() {
                y -= ROW_H;
                if i % 2 == 1 {
                    fill_band(&mut content, x0, y, table_w, (0.96, 0.96, 0.96));
                }
                draw_row(&mut content, y, &col_widths, x0, row, FONT_SIZE, false);
            }

            self.add_page(content);
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// The font is declared with WinAnsiEncoding, which matches Latin-1 outside
/// 0x80..0xA0. Those C1 controls and anything above 0xFF become '?'.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x80..=0x9F => b'?',
            n if n < 256 => n as u8,
            _ => b'?',
        })
        .collect()
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * CHAR_ADVANCE
}

fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    let bytes = latin1(text);
    content.begin_text();
    content.set_font(Name(b"F1"), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&bytes));
    content.end_text();
}

fn draw_centered(content: &mut Content, y: f32, size: f32, text: &str) {
    let x = ((PAGE_W - text_width(text, size)) / 2.0).max(MARGIN);
    draw_text(content, x, y, size, text);
}

fn fill_band(content: &mut Content, x: f32, y: f32, w: f32, (r, g, b): (f32, f32, f32)) {
    content.save_state();
    content.set_fill_rgb(r, g, b);
    content.rect(x, y, w, ROW_H);
    content.fill_nonzero();
    content.restore_state();
}

fn draw_row(content: &mut Content, y: f32, col_widths: &[f32], x_start: f32, row: &[String], size: f32, header: bool) {
    let mut x = x_start;

    for (i, w) in col_widths.iter().enumerate() {
        let text = row.get(i).map(String::as_str).unwrap_or("");

        content.save_state();
        if header {
            content.set_fill_rgb(1.0, 1.0, 1.0);
        }
        draw_text(content, x + 4.0, y + 6.0, size, text);
        content.restore_state();

        content.save_state();
        content.set_stroke_rgb(0.75, 0.75, 0.75);
        content.rect(x, y, *w, ROW_H);
        content.stroke();
        content.restore_state();

        x += w;
    }
}

/// Column widths from header and cell lengths, scaled down to fit the page.
fn compute_col_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
    let mut widths: Vec<f32> = headers
        .iter()
        .map(|h| text_width(h, HEADER_FONT_SIZE) + 12.0)
        .collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(text_width(cell, FONT_SIZE) + 12.0);
        }
    }

    let total: f32 = widths.iter().sum();
    let max = PAGE_W - 2.0 * MARGIN;
    if total > max {
        let scale = max / total;
        for w in &mut widths {
            *w *= scale;
        }
    }

    widths
}
