//! Mock synthesizers and observers for pipeline tests.
//!
//! These validate orchestrator and session behavior without network calls,
//! using scripted responses for fast, deterministic testing.

// Each test binary uses a subset of these helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use ehon_core::{AspectRatio, ImageData};
use ehon_error::{EhonResult, GeminiError, GeminiErrorKind};
use ehon_interface::{
    ImageSynthesizer, PipelineStage, ProgressObserver, StructuredRequest, TextSynthesizer,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One scripted outcome for a synthesizer call.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Return this text (text mock) or an image tagged with it (image mock)
    Ok(String),
    /// Fail with an upstream HTTP error
    Http(u16, String),
}

/// Text synthesizer returning scripted responses in order.
pub struct MockText {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockText {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextSynthesizer for MockText {
    async fn generate_structured(&self, request: &StructuredRequest) -> EhonResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.prompt.clone());
        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Ok(text)) => Ok(text),
            Some(Scripted::Http(status_code, message)) => {
                Err(GeminiError::new(GeminiErrorKind::HttpError {
                    status_code,
                    message,
                })
                .into())
            }
            None => panic!("MockText script exhausted"),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}

/// Image synthesizer that succeeds with deterministic payloads, optionally
/// failing on one specific call (1-based).
pub struct MockImage {
    calls: AtomicUsize,
    fail_on_call: Option<usize>,
    fail_status: u16,
    max_prompt: Option<usize>,
    prompts: Mutex<Vec<String>>,
}

impl MockImage {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on_call: None,
            fail_status: 500,
            max_prompt: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(call: usize, status: u16) -> Self {
        Self {
            fail_on_call: Some(call),
            fail_status: status,
            ..Self::new()
        }
    }

    pub fn with_max_prompt_bytes(max: usize) -> Self {
        Self {
            max_prompt: Some(max),
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageSynthesizer for MockImage {
    async fn generate_image(
        &self,
        prompt: &str,
        _aspect_ratio: AspectRatio,
    ) -> EhonResult<ImageData> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts.lock().unwrap().push(prompt.to_string());
        if Some(call) == self.fail_on_call {
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: self.fail_status,
                message: "scripted failure".to_string(),
            })
            .into());
        }
        // Payload tagged with the call index so tests can tell images apart.
        Ok(ImageData::new("image/png", vec![call as u8]))
    }

    fn image_model_name(&self) -> &str {
        "mock-image"
    }

    fn max_prompt_bytes(&self) -> usize {
        self.max_prompt.unwrap_or(4096)
    }
}

/// Observer recording every stage transition and partial-story page state.
#[derive(Default)]
pub struct RecordingObserver {
    stages: Mutex<Vec<PipelineStage>>,
    partials: Mutex<Vec<usize>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stages(&self) -> Vec<PipelineStage> {
        self.stages.lock().unwrap().clone()
    }

    /// Number of illustrated pages in each partial story observed.
    pub fn partial_progress(&self) -> Vec<usize> {
        self.partials.lock().unwrap().clone()
    }
}

impl ProgressObserver for RecordingObserver {
    fn stage(&self, stage: PipelineStage) {
        self.stages.lock().unwrap().push(stage);
    }

    fn partial(&self, story: &ehon_core::Story) {
        let illustrated = story.pages().iter().filter(|p| !p.image().is_empty()).count();
        self.partials.lock().unwrap().push(illustrated);
    }
}

/// A valid draft response for `pages` pages.
pub fn draft_json(pages: usize) -> String {
    let pages: Vec<String> = (1..=pages)
        .map(|n| {
            format!(
                r#"{{"page_number": {n}, "text": "ページ {n} のぶん", "image_prompt": "scene {n}"}}"#
            )
        })
        .collect();
    format!(
        r#"{{"title": "そらのたび", "character_description": "a small white cat with a red scarf",
            "pages": [{}], "afterword": "おしまい"}}"#,
        pages.join(",")
    )
}

/// A valid page regeneration response.
pub fn page_regen_json(text: &str, prompt: &str) -> String {
    format!(r#"{{"new_text": "{text}", "new_image_prompt": "{prompt}"}}"#)
}

/// A valid cover regeneration response.
pub fn cover_regen_json(title: &str, prompt: &str) -> String {
    format!(r#"{{"new_title": "{title}", "new_image_prompt": "{prompt}"}}"#)
}
