//! Wachsender GPU-Vertex-Buffer mit Ersetzungs-Semantik.

use crate::shared::UploadError;
use bytemuck::Pod;

/// Vertex-Buffer, dessen Inhalt bei jedem Upload vollständig ersetzt wird.
///
/// Der GPU-Buffer wächst bei Bedarf und wird sonst wiederverwendet.
pub(crate) struct DynamicVertexBuffer {
    label: &'static str,
    buffer: Option<wgpu::Buffer>,
    capacity_bytes: u64,
    len: u32,
}

impl DynamicVertexBuffer {
    /// Erstellt einen leeren Buffer ohne GPU-Allokation.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            buffer: None,
            capacity_bytes: 0,
            len: 0,
        }
    }

    /// Prüft, ob `data` in einen Buffer dieses Devices passt.
    pub fn check_fits<T: Pod>(&self, device: &wgpu::Device, data: &[T]) -> Result<(), UploadError> {
        let requested = std::mem::size_of_val(data) as u64;
        let max = device.limits().max_buffer_size;
        if requested > max {
            return Err(UploadError::BufferTooLarge {
                label: self.label,
                requested,
                max,
            });
        }
        Ok(())
    }

    /// Ersetzt den gesamten Inhalt durch `data`.
    pub fn replace<T: Pod>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> Result<(), UploadError> {
        self.check_fits(device, data)?;

        if data.is_empty() {
            self.len = 0;
            return Ok(());
        }

        let bytes: &[u8] = bytemuck::cast_slice(data);
        let size = bytes.len() as u64;
        if self.buffer.is_none() || size > self.capacity_bytes {
            let capacity = size
                .next_power_of_two()
                .min(device.limits().max_buffer_size);
            self.buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: capacity,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity_bytes = capacity;
            log::debug!("{}: neu allokiert mit {} Bytes", self.label, capacity);
        }

        if let Some(buffer) = &self.buffer {
            queue.write_buffer(buffer, 0, bytes);
        }
        self.len = data.len() as u32;
        Ok(())
    }

    /// Anzahl der gültigen Vertices.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Belegter Bereich des Buffers, `None` wenn leer.
    pub fn slice(&self) -> Option<wgpu::BufferSlice<'_>> {
        if self.len == 0 {
            return None;
        }
        self.buffer.as_ref().map(|buffer| buffer.slice(..))
    }
}
