//! GPU-resident wireframe store
//!
//! [`WireframeStore::initialize_all`] uploads one immutable vertex buffer
//! per catalog object, exactly once at startup. Nothing else in the
//! process creates or destroys GPU geometry. Buffers are released when
//! the store is dropped; [`teardown_all`](WireframeStore::teardown_all)
//! makes the shutdown point explicit.

use std::collections::HashMap;
use std::fmt;

use wgpu::util::DeviceExt;

use hyperwire_core::{Catalog, Family};

/// Error type for GPU resource initialization
#[derive(Debug)]
pub enum InitError {
    /// The catalog has no objects to upload
    EmptyCatalog,
    /// The device reported an error while allocating vertex buffers
    Allocation(String),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::EmptyCatalog => write!(f, "catalog has no objects to upload"),
            InitError::Allocation(msg) => write!(f, "GPU allocation failed: {}", msg),
        }
    }
}

impl std::error::Error for InitError {}

/// One object's GPU-resident state.
pub struct BoundPolytope {
    /// Immutable line-list vertex buffer
    pub vertex_buffer: wgpu::Buffer,
    /// Number of N-dimensional points in the buffer
    pub vertex_count: u32,
    /// Ambient dimension, selects the pipeline variant
    pub dimensions: usize,
    /// Whether the edge pass is drawn for this object
    pub render_edges: bool,
}

/// GPU vertex buffers for every catalog object, keyed like the catalog.
pub struct WireframeStore {
    bound: HashMap<(Family, usize), BoundPolytope>,
}

impl WireframeStore {
    /// Upload every catalog object's vertex data. Called exactly once at
    /// startup, before the first frame.
    ///
    /// # Errors
    /// [`InitError`] if the catalog is empty or the device fails to
    /// allocate; the caller should treat this as fatal.
    pub fn initialize_all(device: &wgpu::Device, catalog: &Catalog) -> Result<Self, InitError> {
        if catalog.is_empty() {
            return Err(InitError::EmptyCatalog);
        }

        device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let mut bound = HashMap::new();
        for obj in catalog.iter() {
            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(obj.name()),
                contents: bytemuck::cast_slice(obj.vertices()),
                usage: wgpu::BufferUsages::VERTEX,
            });
            bound.insert(
                (obj.family(), obj.dimensions()),
                BoundPolytope {
                    vertex_buffer,
                    vertex_count: obj.vertex_count() as u32,
                    dimensions: obj.dimensions(),
                    render_edges: obj.render_edges(),
                },
            );
        }

        let validation = pollster::block_on(device.pop_error_scope());
        let oom = pollster::block_on(device.pop_error_scope());
        if let Some(err) = oom.or(validation) {
            return Err(InitError::Allocation(err.to_string()));
        }

        log::info!("uploaded {} wireframe buffers", bound.len());
        Ok(Self { bound })
    }

    /// The GPU state bound for (family, dimensions), if registered.
    pub fn get(&self, family: Family, dimensions: usize) -> Option<&BoundPolytope> {
        self.bound.get(&(family, dimensions))
    }

    /// Number of uploaded objects.
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Release all GPU buffers. Consumes the store so a second teardown
    /// is unrepresentable; dropping the store without calling this
    /// releases the same resources.
    pub fn teardown_all(self) {
        log::info!("released {} wireframe buffers", self.bound.len());
        drop(self);
    }
}
