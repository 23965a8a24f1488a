use wgpu::util::DeviceExt;

use crate::attribute::{ElementType, VertexPointer};
use crate::render::{RenderCtx, RenderTarget};
use crate::uniform::UniformValue;

use super::program::ProgramLayout;
use super::surface::{AttributeLocation, DrawSurface, Topology, UniformLocation};

/// wgpu implementation of [`DrawSurface`] for a single [`ProgramLayout`].
///
/// Surface calls only stage state on the CPU. [`render`](Self::render)
/// flushes staged vertices and uniforms, rebuilds the pipeline when the
/// bound vertex layout or target format changed, and records one pass that
/// draws the last requested vertex count.
pub struct StripRenderer {
    program: ProgramLayout,

    pipeline_key: Option<PipelineKey>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_ubo: Option<wgpu::Buffer>,
    uniform_bytes: Vec<u8>,
    uniforms_dirty: bool,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: u64,
    staged_vertices: Option<Vec<u8>>,

    bindings: Vec<(AttributeLocation, VertexPointer)>,
    pending: Option<(u32, Topology)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PipelineKey {
    format: wgpu::TextureFormat,
    topology: Topology,
    inputs: Vec<(u32, wgpu::VertexFormat, u64)>,
}

impl StripRenderer {
    pub fn new(program: ProgramLayout) -> Self {
        let block_size = program.uniforms().size() as usize;
        Self {
            program,
            pipeline_key: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            uniform_ubo: None,
            uniform_bytes: vec![0; block_size],
            uniforms_dirty: block_size > 0,
            vbo: None,
            vbo_capacity: 0,
            staged_vertices: None,
            bindings: Vec::new(),
            pending: None,
        }
    }

    #[inline]
    pub fn program(&self) -> &ProgramLayout {
        &self.program
    }

    /// Encodes the pending draw into `target`, loading existing contents.
    ///
    /// Does nothing when no draw was requested since the last call or the
    /// requested count is zero.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let Some((count, topology)) = self.pending.take() else { return };

        self.flush_vertices(ctx);
        if count == 0 || self.bindings.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx, topology);
        self.ensure_bindings(ctx);
        self.flush_uniforms(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(self.program.label.as_str()),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        if let Some(bind_group) = self.bind_group.as_ref() {
            rpass.set_bind_group(0, bind_group, &[]);
        }
        // One buffer slot per attribute, each a view into the packed buffer.
        for (slot, (_, pointer)) in self.bindings.iter().enumerate() {
            rpass.set_vertex_buffer(slot as u32, vbo.slice(pointer.offset..));
        }
        rpass.draw(0..count, 0..1);
    }

    fn flush_vertices(&mut self, ctx: &RenderCtx<'_>) {
        let Some(mut bytes) = self.staged_vertices.take() else { return };

        // Queue writes must be a multiple of COPY_BUFFER_ALIGNMENT.
        let aligned = (bytes.len() as u64).next_multiple_of(wgpu::COPY_BUFFER_ALIGNMENT);
        bytes.resize(aligned as usize, 0);
        if bytes.is_empty() {
            return;
        }

        if let Some(vbo) = self.vbo.as_ref().filter(|_| aligned <= self.vbo_capacity) {
            ctx.queue.write_buffer(vbo, 0, &bytes);
            return;
        }

        log::debug!("{}: allocating {} byte vertex buffer", self.program.label, aligned);
        self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(self.program.label.as_str()),
            contents: &bytes,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        }));
        self.vbo_capacity = aligned;
    }

    fn flush_uniforms(&mut self, ctx: &RenderCtx<'_>) {
        if !self.uniforms_dirty {
            return;
        }
        let Some(ubo) = self.uniform_ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, &self.uniform_bytes);
        self.uniforms_dirty = false;
    }

    fn pipeline_key(&self, ctx: &RenderCtx<'_>, topology: Topology) -> PipelineKey {
        PipelineKey {
            format: ctx.surface_format,
            topology,
            inputs: self
                .bindings
                .iter()
                .filter_map(|(location, pointer)| {
                    pointer
                        .vertex_format()
                        .map(|format| (location.0, format, pointer.stride))
                })
                .collect(),
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, topology: Topology) {
        let key = self.pipeline_key(ctx, topology);
        if self.pipeline.is_some() && self.pipeline_key.as_ref() == Some(&key) {
            return;
        }

        let label = self.program.label.as_str();
        log::debug!("{label}: building pipeline for {:?} with {} input(s)", topology, key.inputs.len());

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(self.program.source.clone()),
        });

        let block = self.program.uniforms();
        let bind_group_layout = (!block.is_empty()).then(|| {
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some(label),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(block.size()),
                        },
                        count: None,
                    }],
                })
        });

        let bind_group_layouts: Vec<&wgpu::BindGroupLayout> = bind_group_layout.iter().collect();
        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &bind_group_layouts,
            immediate_size: 0,
        });

        let attributes: Vec<[wgpu::VertexAttribute; 1]> = key
            .inputs
            .iter()
            .map(|&(location, format, _)| {
                [wgpu::VertexAttribute {
                    format,
                    offset: 0,
                    shader_location: location,
                }]
            })
            .collect();
        let buffers: Vec<wgpu::VertexBufferLayout<'_>> = key
            .inputs
            .iter()
            .zip(&attributes)
            .map(|(&(_, _, stride), attrs)| wgpu::VertexBufferLayout {
                array_stride: stride,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: attrs,
            })
            .collect();

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &buffers,
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: topology.to_wgpu(),
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_key = Some(key);
        self.pipeline = Some(pipeline);

        // The bind group layout is tied to the pipeline layout; rebuild both.
        self.bind_group_layout = bind_group_layout;
        self.bind_group = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let ubo = match self.uniform_ubo.take() {
            Some(ubo) => ubo,
            None => ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.program.label.as_str()),
                size: self.uniform_bytes.len() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }),
        };

        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(self.program.label.as_str()),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        }));
        self.uniform_ubo = Some(ubo);
        self.uniforms_dirty = true;
    }
}

impl DrawSurface for StripRenderer {
    fn upload_vertices(&mut self, bytes: &[u8]) {
        self.staged_vertices = Some(bytes.to_vec());
    }

    fn attribute_location(&self, name: &str) -> Option<AttributeLocation> {
        self.program.attribute_location(name)
    }

    fn bind_attribute(&mut self, location: AttributeLocation, pointer: &VertexPointer) {
        if pointer.vertex_format().is_none() {
            log::warn!(
                "{}: attribute '{}' has no vertex format for {} x {:?}; not bound",
                self.program.label,
                pointer.name,
                pointer.components,
                pointer.element
            );
            return;
        }
        if pointer.normalize && pointer.element != ElementType::Float {
            log::warn!(
                "{}: attribute '{}' asks for normalized {:?}, which has no vertex format; not bound",
                self.program.label,
                pointer.name,
                pointer.element
            );
            return;
        }

        match self.bindings.iter_mut().find(|(l, _)| *l == location) {
            Some(slot) => slot.1 = pointer.clone(),
            None => {
                self.bindings.push((location, pointer.clone()));
                self.bindings.sort_by_key(|(l, _)| l.0);
            }
        }
    }

    fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.program.uniforms().location(name)
    }

    fn set_uniform(&mut self, location: UniformLocation, value: &UniformValue) {
        let Some(field) = self.program.uniforms().field(location) else { return };
        if field.kind != value.kind() {
            log::warn!(
                "{}: uniform '{}' is {} in the shader, got {}",
                self.program.label,
                field.name,
                field.kind,
                value.kind()
            );
            return;
        }
        value.write_wgsl(&mut self.uniform_bytes[field.range()]);
        self.uniforms_dirty = true;
    }

    fn draw(&mut self, count: u32, topology: Topology) {
        self.pending = Some((count, topology));
    }
}
