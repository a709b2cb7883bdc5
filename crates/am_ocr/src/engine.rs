use std::path::{Path, PathBuf};

use anyhow::Result;
use image::GrayImage;
use ocr_rs::OcrEngine;

use crate::types::{BoundingBox, MATH_ALLOWLIST, TextRecognizer, TextSpan};

/// OCR language information.
#[derive(Debug, Clone)]
pub struct OcrLanguageInfo {
    /// Language identifier (e.g. "english").
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Recognition model filename.
    pub rec_model: String,
    /// Charset filename.
    pub charset_file: String,
}

/// Host-provided OCR configuration.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Directory containing the model files.
    pub models_dir: PathBuf,
    /// Language identifier.
    pub language: String,
}

impl OcrConfig {
    pub fn new(models_dir: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            models_dir: models_dir.into(),
            language: language.into(),
        }
    }
}

/// Get model paths for the given config.
pub fn get_model_paths(config: &OcrConfig) -> Result<(PathBuf, PathBuf, PathBuf)> {
    let language = config.language.as_str();

    // Detection model (shared by all languages).
    let det_path = config.models_dir.join("PP-OCRv5_mobile_det.mnn");

    let available_languages = get_available_languages(&config.models_dir);
    let lang_info = available_languages
        .iter()
        .find(|l| l.id == language)
        .or_else(|| available_languages.first());

    let (rec_model, charset) = match lang_info {
        Some(info) => (info.rec_model.clone(), info.charset_file.clone()),
        None => return Err(anyhow::anyhow!("no OCR language models available")),
    };

    let rec_path = config.models_dir.join(&rec_model);
    let charset_path = config.models_dir.join(&charset);

    if !det_path.exists() {
        return Err(anyhow::anyhow!(
            "detection model missing: {}",
            det_path.display()
        ));
    }
    if !rec_path.exists() {
        return Err(anyhow::anyhow!(
            "recognition model missing: {}",
            rec_path.display()
        ));
    }
    if !charset_path.exists() {
        return Err(anyhow::anyhow!(
            "charset file missing: {}",
            charset_path.display()
        ));
    }

    Ok((det_path, rec_path, charset_path))
}

/// Detect available OCR languages by inspecting the models directory.
pub fn get_available_languages(models_dir: &Path) -> Vec<OcrLanguageInfo> {
    let mut languages = Vec::new();

    // Language config: (id, display_name, rec_model, charset). Handwritten math
    // only needs latin glyphs, so the list stays short.
    let lang_configs = [
        (
            "english",
            "English",
            "en_PP-OCRv5_mobile_rec_infer.mnn",
            "ppocr_keys_en.txt",
        ),
        (
            "latin",
            "Latin",
            "latin_PP-OCRv5_mobile_rec_infer.mnn",
            "ppocr_keys_latin.txt",
        ),
    ];

    for (id, display_name, rec_model, charset) in lang_configs {
        let rec_path = models_dir.join(rec_model);
        let charset_path = models_dir.join(charset);

        // Only include languages with both files present.
        if rec_path.exists() && charset_path.exists() {
            languages.push(OcrLanguageInfo {
                id: id.to_string(),
                display_name: display_name.to_string(),
                rec_model: rec_model.to_string(),
                charset_file: charset.to_string(),
            });
        }
    }

    languages
}

/// Check whether model files exist for the given config.
pub fn models_exist(config: &OcrConfig) -> bool {
    get_model_paths(config).is_ok()
}

/// `ocr-rs`-backed recognizer.
pub struct EngineRecognizer {
    engine: OcrEngine,
}

impl EngineRecognizer {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let (det_path, rec_path, charset_path) = get_model_paths(config)?;
        let engine = OcrEngine::new(&det_path, &rec_path, &charset_path, None)
            .map_err(|e| anyhow::anyhow!("failed to create OCR engine: {e}"))?;
        Ok(Self { engine })
    }
}

impl TextRecognizer for EngineRecognizer {
    fn recognize(&mut self, image: &GrayImage) -> Result<Vec<TextSpan>> {
        let img = image::DynamicImage::ImageLuma8(image.clone());
        let raw_results = self
            .engine
            .recognize(&img)
            .map_err(|e| anyhow::anyhow!("OCR recognition failed: {e}"))?;

        // The engine has no character-set restriction option, so spans are
        // filtered to the math glyph set after the fact.
        let spans = raw_results
            .into_iter()
            .map(|r| TextSpan {
                text: r
                    .text
                    .chars()
                    .filter(|c| MATH_ALLOWLIST.contains(*c))
                    .collect(),
                confidence: r.confidence,
                bounding_box: BoundingBox {
                    x: r.bbox.rect.left(),
                    y: r.bbox.rect.top(),
                    width: r.bbox.rect.width() as i32,
                    height: r.bbox.rect.height() as i32,
                },
            })
            .filter(|s: &TextSpan| !s.text.trim().is_empty())
            .collect();
        Ok(spans)
    }
}
