//! Render pipelines for wireframe drawing
//!
//! One shader module serves every object; what varies per ambient
//! dimension is the vertex-buffer layout (stride and attribute groups),
//! which wgpu bakes into the pipeline. [`WirePipeline`] therefore keeps a
//! small pipeline pair (lines + points) per registered dimension, created
//! once at startup, plus separate uniform buffers for the edge and
//! point-marker draws so the two passes can differ in color.

use std::collections::HashMap;

use wgpu::util::DeviceExt;

use crate::layout::AttributeLayout;

use super::types::WireUniforms;

/// Line-list and point-list pipelines for one ambient dimension.
struct DimensionPipelines {
    lines: wgpu::RenderPipeline,
    points: wgpu::RenderPipeline,
}

/// Wireframe render pipelines plus their shared uniform state.
pub struct WirePipeline {
    shader: wgpu::ShaderModule,
    pipeline_layout: wgpu::PipelineLayout,
    surface_format: wgpu::TextureFormat,
    variants: HashMap<usize, DimensionPipelines>,
    edge_uniform_buffer: wgpu::Buffer,
    edge_bind_group: wgpu::BindGroup,
    point_uniform_buffer: wgpu::Buffer,
    point_bind_group: wgpu::BindGroup,
    depth_texture: Option<wgpu::TextureView>,
    depth_size: (u32, u32),
}

impl WirePipeline {
    /// Create the shared pipeline state.
    ///
    /// Call [`prepare_dimension`](Self::prepare_dimension) for every
    /// dimension the catalog registers before drawing.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Wire Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Wire Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader_source = include_str!("../shaders/wire.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Wire Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let edge_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Edge Uniform Buffer"),
            contents: bytemuck::bytes_of(&WireUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let edge_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Edge Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: edge_uniform_buffer.as_entire_binding(),
            }],
        });

        let point_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Uniform Buffer"),
            contents: bytemuck::bytes_of(&WireUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let point_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Point Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: point_uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            shader,
            pipeline_layout,
            surface_format,
            variants: HashMap::new(),
            edge_uniform_buffer,
            edge_bind_group,
            point_uniform_buffer,
            point_bind_group,
            depth_texture: None,
            depth_size: (0, 0),
        }
    }

    /// Build the line/point pipeline pair for one ambient dimension.
    ///
    /// Idempotent per dimension; the vertex layout comes from the
    /// attribute planner and the entry point from its group count.
    pub fn prepare_dimension(&mut self, device: &wgpu::Device, dimensions: usize) {
        if self.variants.contains_key(&dimensions) {
            return;
        }

        let layout = AttributeLayout::new(dimensions);
        let entry_point = match layout.num_groups() {
            1 => "vs_one_group",
            2 => "vs_two_group",
            n => unreachable!("no shader entry point for {} attribute groups", n),
        };

        let lines = self.build_pipeline(
            device,
            &layout,
            entry_point,
            wgpu::PrimitiveTopology::LineList,
        );
        let points = self.build_pipeline(
            device,
            &layout,
            entry_point,
            wgpu::PrimitiveTopology::PointList,
        );

        log::debug!(
            "wire pipelines for {}D ready ({} attribute groups)",
            dimensions,
            layout.num_groups()
        );
        self.variants
            .insert(dimensions, DimensionPipelines { lines, points });
    }

    fn build_pipeline(
        &self,
        device: &wgpu::Device,
        layout: &AttributeLayout,
        entry_point: &str,
        topology: wgpu::PrimitiveTopology,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Wire Pipeline"),
            layout: Some(&self.pipeline_layout),
            vertex: wgpu::VertexState {
                module: &self.shader,
                entry_point: Some(entry_point),
                buffers: &[layout.buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &self.shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    /// Write the per-frame uniforms for the edge and point draws.
    pub fn update_uniforms(
        &self,
        queue: &wgpu::Queue,
        edge_uniforms: &WireUniforms,
        point_uniforms: &WireUniforms,
    ) {
        queue.write_buffer(
            &self.edge_uniform_buffer,
            0,
            bytemuck::bytes_of(edge_uniforms),
        );
        queue.write_buffer(
            &self.point_uniform_buffer,
            0,
            bytemuck::bytes_of(point_uniforms),
        );
    }

    /// Ensure the depth texture exists and matches the surface size.
    pub fn ensure_depth_texture(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.depth_texture.is_none() || self.depth_size != (width, height) {
            let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Wire Depth Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Depth32Float,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });
            self.depth_texture =
                Some(depth_texture.create_view(&wgpu::TextureViewDescriptor::default()));
            self.depth_size = (width, height);
        }
    }

    /// Draw one object: a line-list pass over the whole buffer when edges
    /// are enabled, then a point-list pass over the same vertex count for
    /// the vertex markers.
    ///
    /// # Panics
    /// Panics if [`prepare_dimension`](Self::prepare_dimension) was not
    /// called for the object's dimension, or the depth texture is missing.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        vertex_buffer: &wgpu::Buffer,
        vertex_count: u32,
        dimensions: usize,
        render_edges: bool,
        clear_color: wgpu::Color,
    ) {
        let variant = self
            .variants
            .get(&dimensions)
            .expect("pipeline not prepared for this dimension");
        let depth_view = self
            .depth_texture
            .as_ref()
            .expect("Depth texture not created. Call ensure_depth_texture first.");

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Wire Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));

        if render_edges {
            render_pass.set_pipeline(&variant.lines);
            render_pass.set_bind_group(0, &self.edge_bind_group, &[]);
            render_pass.draw(0..vertex_count, 0..1);
        }

        render_pass.set_pipeline(&variant.points);
        render_pass.set_bind_group(0, &self.point_bind_group, &[]);
        render_pass.draw(0..vertex_count, 0..1);
    }

    /// Dimensions with pipelines already built.
    pub fn prepared_dimensions(&self) -> usize {
        self.variants.len()
    }
}
