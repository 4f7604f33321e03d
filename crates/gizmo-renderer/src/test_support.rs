use std::cell::{Ref, RefCell};

use crate::renderable::{BufferUsage, GpuBackend};

#[derive(Debug, Clone)]
pub struct Upload {
    pub label: String,
    pub bytes: Vec<u8>,
    pub usage: BufferUsage,
}

/// Backend that keeps every upload in memory; buffer handles are upload indices.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    uploads: RefCell<Vec<Upload>>,
}

impl RecordingBackend {
    pub fn uploads(&self) -> Ref<'_, Vec<Upload>> {
        self.uploads.borrow()
    }
}

impl GpuBackend for RecordingBackend {
    type Buffer = usize;
    type Shader = &'static str;

    fn upload_buffer(&self, label: &str, contents: &[u8], usage: BufferUsage) -> usize {
        let mut uploads = self.uploads.borrow_mut();
        uploads.push(Upload {
            label: label.to_string(),
            bytes: contents.to_vec(),
            usage,
        });
        uploads.len() - 1
    }
}
