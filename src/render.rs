use crate::camera;
use crate::constants::CLEAR_COLOR;
use folio_core::{FramePlacement, RenderBridge, Snapshot, TextureSet};
use web_sys as web;

mod frames;
mod helpers;
mod textures;

use frames::{BackdropUniforms, CameraUniforms, FrameInstance};
pub use textures::ArtworkTextures;

pub static FRAMES_WGSL: &str = include_str!("../shaders/frames.wgsl");
pub static BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    frame_pipeline: wgpu::RenderPipeline,
    backdrop_pipeline: wgpu::RenderPipeline,
    texture_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,

    camera_buffer: wgpu::Buffer,
    camera_bg: wgpu::BindGroup,
    backdrop_buffer: wgpu::Buffer,
    backdrop_bg: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    instances: Vec<(usize, FrameInstance)>,

    textures: ArtworkTextures,
    layout: Vec<FramePlacement>,
    frame_width: f32,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        layout: Vec<FramePlacement>,
        frame_width: f32,
        textures: ArtworkTextures,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits; older WebGPU impls reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (depth_tex, depth_view) = helpers::create_depth_target(&device, width, height);

        let uniform_bgl = helpers::uniform_layout(&device, "uniform_bgl");
        let texture_bgl = helpers::texture_layout(&device);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("artwork_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let camera_buffer = helpers::uniform_buffer::<CameraUniforms>(&device, "camera_uniforms");
        let camera_bg = helpers::uniform_bind_group(&device, "camera_bg", &uniform_bgl, &camera_buffer);
        let backdrop_buffer =
            helpers::uniform_buffer::<BackdropUniforms>(&device, "backdrop_uniforms");
        let backdrop_bg =
            helpers::uniform_bind_group(&device, "backdrop_bg", &uniform_bgl, &backdrop_buffer);
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_instances"),
            size: (std::mem::size_of::<FrameInstance>() * layout.len().max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let frame_pipeline = create_frame_pipeline(&device, format, &uniform_bgl, &texture_bgl);
        let backdrop_pipeline =
            create_backdrop_pipeline(&device, format, &uniform_bgl, &texture_bgl);

        log::info!(
            "[gpu] ready {}x{} format={:?} frames={}",
            width,
            height,
            format,
            layout.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_tex,
            depth_view,
            frame_pipeline,
            backdrop_pipeline,
            texture_bgl,
            sampler,
            camera_buffer,
            camera_bg,
            backdrop_buffer,
            backdrop_bg,
            instance_buffer,
            instances: Vec::with_capacity(layout.len()),
            textures,
            layout,
            frame_width,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn textures_settled(&self) -> bool {
        self.textures.is_settled()
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (depth_tex, depth_view) =
                helpers::create_depth_target(&self.device, width, height);
            self.depth_tex.destroy();
            self.depth_tex = depth_tex;
            self.depth_view = depth_view;
        }
    }

    pub fn render(&mut self, snapshot: &Snapshot) -> Result<(), wgpu::SurfaceError> {
        self.textures
            .poll(&self.device, &self.queue, &self.texture_bgl, &self.sampler);

        let cam = camera::scene_camera(self.width, self.height);
        let cam_u = CameraUniforms {
            view_proj: cam.view_projection().to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&cam_u));

        let textures = &self.textures;
        frames::build_instances(
            snapshot,
            &self.layout,
            self.frame_width,
            |i| textures.get(i).map(|t| t.aspect()),
            &mut self.instances,
        );
        if !self.instances.is_empty() {
            let packed: Vec<FrameInstance> = self.instances.iter().map(|(_, inst)| *inst).collect();
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&packed));
        }

        let blend = frames::backdrop_blend(
            snapshot.texture_pairing,
            snapshot.cross_fade_progress,
            |i| self.textures.get(i).is_some(),
        );
        if let Some(b) = &blend {
            self.queue
                .write_buffer(&self.backdrop_buffer, 0, bytemuck::bytes_of(&b.uniforms));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(b) = &blend {
                if let (Some(from), Some(to)) = (self.textures.get(b.from), self.textures.get(b.to)) {
                    rpass.set_pipeline(&self.backdrop_pipeline);
                    rpass.set_bind_group(0, &self.backdrop_bg, &[]);
                    rpass.set_bind_group(1, &from.bind_group, &[]);
                    rpass.set_bind_group(2, &to.bind_group, &[]);
                    rpass.draw(0..3, 0..1);
                }
            }

            rpass.set_pipeline(&self.frame_pipeline);
            rpass.set_bind_group(0, &self.camera_bg, &[]);
            rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
            for (slot, (index, _)) in self.instances.iter().enumerate() {
                let Some(tex) = self.textures.get(*index) else {
                    continue;
                };
                let slot = slot as u32;
                rpass.set_bind_group(1, &tex.bind_group, &[]);
                rpass.draw(0..6, slot..slot + 1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl RenderBridge for GpuState<'_> {
    fn present(&mut self, snapshot: &Snapshot) {
        match self.render(snapshot) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

fn create_frame_pipeline(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    uniform_bgl: &wgpu::BindGroupLayout,
    texture_bgl: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("frames_shader"),
        source: wgpu::ShaderSource::Wgsl(FRAMES_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("frames_pl"),
        bind_group_layouts: &[uniform_bgl, texture_bgl],
        push_constant_ranges: &[],
    });
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        0 => Float32x4,
        1 => Float32x4,
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4
    ];
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("frames_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_frame"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<FrameInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_frame"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

fn create_backdrop_pipeline(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    uniform_bgl: &wgpu::BindGroupLayout,
    texture_bgl: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("backdrop_shader"),
        source: wgpu::ShaderSource::Wgsl(BACKDROP_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("backdrop_pl"),
        bind_group_layouts: &[uniform_bgl, texture_bgl, texture_bgl],
        push_constant_ranges: &[],
    });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("backdrop_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_fullscreen"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        // Always behind the frames; never writes depth
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Always,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_backdrop"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
