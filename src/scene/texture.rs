//! Texture handles and the asynchronous texture-loading seam.
//!
//! Loads complete via one-shot completions collected with
//! [`TextureSource::poll`] on the frame tick; nothing blocks the frame loop
//! waiting for a fetch to resolve.

use crate::error::TextureError;

/// Monotonic identifier for an in-flight texture request.
pub type RequestId = u64;

/// A loaded equirectangular panorama texture.
///
/// Decoding and GPU upload are the host's concern; this handle carries the
/// source file and payload size so materials can be compared and released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub file: String,
    pub size_bytes: usize,
}

impl Texture {
    pub fn new(file: impl Into<String>, size_bytes: usize) -> Self {
        Self {
            file: file.into(),
            size_bytes,
        }
    }
}

/// Outcome of one texture request.
#[derive(Debug, Clone)]
pub struct TextureCompletion {
    pub request: RequestId,
    pub file: String,
    pub result: Result<Texture, TextureError>,
}

/// Asynchronous texture loader.
///
/// `request` registers a load and returns immediately; completed loads are
/// handed back from `poll`, called once per frame by the panorama controller.
pub trait TextureSource {
    fn request(&mut self, file: &str) -> RequestId;
    fn poll(&mut self) -> Vec<TextureCompletion>;
}

/// Texture source that fetches files over HTTP with `ureq`.
///
/// Fetches run when `poll` is called, one pending request per call, so a
/// slow image delays later requests but never a `request` caller.
#[derive(Debug, Default)]
pub struct HttpTextureSource {
    next_id: RequestId,
    pending: Vec<(RequestId, String)>,
}

impl HttpTextureSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn fetch(file: &str) -> Result<Texture, TextureError> {
        let bytes = ureq::get(file)
            .call()
            .map_err(|e| TextureError::Fetch {
                file: file.to_string(),
                message: e.to_string(),
            })?
            .into_body()
            .read_to_vec()
            .map_err(|e| TextureError::Fetch {
                file: file.to_string(),
                message: e.to_string(),
            })?;
        Ok(Texture::new(file, bytes.len()))
    }
}

impl TextureSource for HttpTextureSource {
    fn request(&mut self, file: &str) -> RequestId {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push((id, file.to_string()));
        id
    }

    fn poll(&mut self) -> Vec<TextureCompletion> {
        if self.pending.is_empty() {
            return Vec::new();
        }
        let (request, file) = self.pending.remove(0);
        let result = Self::fetch(&file);
        if let Err(err) = &result {
            log::warn!("texture load failed: {err}");
        }
        vec![TextureCompletion {
            request,
            file,
            result,
        }]
    }
}

/// In-memory texture source with caller-driven completion order.
///
/// Lets embedders and tests decide when and how a request resolves.
#[derive(Debug, Default)]
pub struct QueuedTextureSource {
    next_id: RequestId,
    pending: Vec<(RequestId, String)>,
    completed: Vec<TextureCompletion>,
}

impl QueuedTextureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files with requests that have not been completed yet.
    pub fn pending_files(&self) -> Vec<String> {
        self.pending.iter().map(|(_, f)| f.clone()).collect()
    }

    /// Resolves the oldest pending request with a loaded texture.
    /// Returns false when nothing is pending.
    pub fn complete_next(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        let (request, file) = self.pending.remove(0);
        let texture = Texture::new(file.clone(), 0);
        self.completed.push(TextureCompletion {
            request,
            file,
            result: Ok(texture),
        });
        true
    }

    /// Fails the oldest pending request. Returns false when nothing is
    /// pending.
    pub fn fail_next(&mut self, message: &str) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        let (request, file) = self.pending.remove(0);
        self.completed.push(TextureCompletion {
            request,
            file: file.clone(),
            result: Err(TextureError::Fetch {
                file,
                message: message.to_string(),
            }),
        });
        true
    }
}

impl TextureSource for QueuedTextureSource {
    fn request(&mut self, file: &str) -> RequestId {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push((id, file.to_string()));
        id
    }

    fn poll(&mut self) -> Vec<TextureCompletion> {
        std::mem::take(&mut self.completed)
    }
}
