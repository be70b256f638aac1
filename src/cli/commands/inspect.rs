use crate::cli::input::{load_config, read_input};
use crate::decoder::{ContentDecoder, DecoderError};
use crate::detection::resolve_extension;
use crate::errors::AppResult;
use crate::types::{ContentKind, ContentSniffer};
use crate::utils::size::format_byte_count;
use clap::Args;
use serde::Serialize;

/// Classify base64 or a data URL without saving it
#[derive(Args)]
pub struct InspectCommand {
    /// Base64 text, a data URL, a file containing either, or `-` for stdin
    pub input: String,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Bytes shown in the hex header dump
    #[arg(long, default_value_t = 32)]
    pub header_bytes: usize,

    /// Characters shown in the text preview
    #[arg(long, default_value_t = 200)]
    pub preview_chars: usize,
}

/// What `inspect` reports about one payload
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub kind: Option<ContentKind>,
    pub title: Option<&'static str>,
    pub declared_mime: Option<String>,
    pub extension: String,
    pub size_bytes: usize,
    pub header_hex: String,
    pub preview: Option<String>,
    pub message: Option<&'static str>,
}

impl InspectReport {
    /// Decode and classify `input`; `None` when it decodes to nothing
    ///
    /// Unsupported content still produces a report, with `kind` unset and the
    /// user-facing message filled in.
    pub fn from_input(
        decoder: &ContentDecoder,
        input: &str,
        header_bytes: usize,
        preview_chars: usize,
    ) -> AppResult<Option<Self>> {
        let Some(raw) = decoder.decode_bytes(input)? else {
            return Ok(None);
        };

        let data = raw.bytes.as_slice();
        let mut report = InspectReport {
            kind: None,
            title: None,
            declared_mime: raw.declared_mime.clone(),
            extension: resolve_extension(raw.declared_mime.as_deref(), Some(data)),
            size_bytes: data.len(),
            header_hex: hex::encode(&data[..data.len().min(header_bytes)]),
            preview: None,
            message: None,
        };

        match decoder.sniffer().classify(raw.bytes) {
            Ok(content) => {
                report.kind = Some(content.kind());
                report.title = Some(content.kind().title());
                report.preview = content.text_preview(preview_chars);
            }
            Err(e @ DecoderError::UnsupportedContent) => {
                report.message = Some(e.user_message());
            }
            Err(e) => return Err(e.into()),
        }
        Ok(Some(report))
    }
}

impl InspectCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = load_config()?;
        let input = read_input(&self.input).await?;
        let decoder =
            ContentDecoder::new(ContentSniffer::with_pdf_detection(config.sniffer.detect_pdf));

        let Some(report) =
            InspectReport::from_input(&decoder, &input, self.header_bytes, self.preview_chars)?
        else {
            println!("No content");
            return Ok(());
        };

        if self.format.eq_ignore_ascii_case("json") {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report_text(&report);
        }
        Ok(())
    }
}

fn print_report_text(report: &InspectReport) {
    println!("\n=== Decoded Content ===");
    match report.title {
        Some(title) => println!("Kind: {}", title),
        None => println!("Kind: unknown"),
    }
    if let Some(mime) = &report.declared_mime {
        println!("Declared MIME: {}", mime);
    }
    println!("Extension: .{}", report.extension);
    println!(
        "Size: {} ({} bytes)",
        format_byte_count(report.size_bytes as i64),
        report.size_bytes
    );
    println!("Header (hex): {}", report.header_hex);

    if let Some(preview) = &report.preview {
        println!();
        println!("Preview:");
        for line in preview.lines() {
            println!("  {}", line);
        }
    }
    if let Some(message) = report.message {
        println!();
        println!("{}", message);
    }
}
