//! Response sinks receiving rendered output.

use std::io::Write;

/// Destination for a rendered template.
///
/// [`TemplateRegistry::execute`](crate::TemplateRegistry::execute) calls
/// `set_content_type` (only for known extensions), then `write_status`, then
/// `write_body` exactly once.
pub trait ResponseSink {
    fn set_content_type(&mut self, content_type: &'static str);
    fn write_status(&mut self, status: u16);
    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()>;
}

/// In-memory response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferedResponse {
    pub content_type: Option<&'static str>,
    pub status: Option<u16>,
    pub body: Vec<u8>,
}

impl BufferedResponse {
    /// Body as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn body_str(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl ResponseSink for BufferedResponse {
    fn set_content_type(&mut self, content_type: &'static str) {
        self.content_type = Some(content_type);
    }

    fn write_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()> {
        self.body.extend_from_slice(body);
        Ok(())
    }
}

/// Response streaming its body into a writer, keeping headers in memory.
#[derive(Debug)]
pub struct WriterResponse<W> {
    pub content_type: Option<&'static str>,
    pub status: Option<u16>,
    writer: W,
}

impl<W: Write> WriterResponse<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            content_type: None,
            status: None,
            writer,
        }
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResponseSink for WriterResponse<W> {
    fn set_content_type(&mut self, content_type: &'static str) {
        self.content_type = Some(content_type);
    }

    fn write_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()> {
        self.writer.write_all(body)?;
        self.writer.flush()
    }
}
