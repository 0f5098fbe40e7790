//! Desktop viewer: winit window, wgpu point pipeline, pan/zoom camera.
//!
//! The event loop owns both the camera and the GPU state on one thread;
//! input events mutate the camera between frames, which is the exclusive
//! ownership discipline the shared core assumes.

use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use swirl_core::{
    demo_points, grid, input, CameraState, PointBuffer, RenderError, BASE_SCALE,
};

// One wheel notch reported as a line delta matches a browser deltaY of
// about -100 with the opposite sign convention.
const WHEEL_LINE_TO_DELTA: f64 = -100.0;

const DEMO_POINT_COUNT: usize = 100_000;
const DEMO_SEED: u64 = 42;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    resolution: [f32; 2],
    pan: [f32; 2],
    aspect: f32,
    scale: f32,
    point_size: f32,
    _pad: f32,
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: Option<wgpu::Buffer>,
    instance_count: u32,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(|_| RenderError::ContextUnavailable)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::ContextUnavailable)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        // Non-fatal shader trouble: log it and keep presenting blank frames.
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene"),
            source: wgpu::ShaderSource::Wgsl(swirl_core::SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad vertices for two triangles
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-point position + energy
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<swirl_core::Point>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 8,
                        shader_location: 2,
                    },
                ],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("points"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        if let Some(e) = pollster::block_on(device.pop_error_scope()) {
            log::warn!("{}", RenderError::ShaderCompileFailed(e.to_string()));
        }

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb: None,
            instance_count: 0,
            bind_group,
            width: size.width.max(1),
            height: size.height.max(1),
        })
    }

    fn upload(&mut self, points: &PointBuffer) {
        if points.is_empty() {
            self.instance_vb = None;
            self.instance_count = 0;
            return;
        }
        self.instance_vb = Some(self.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("instance_vb"),
                contents: bytemuck::cast_slice(points.points()),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
        self.instance_count = points.len() as u32;
        log::info!("uploaded {} points", points.len());
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    #[inline]
    fn aspect(&self) -> f64 {
        self.width as f64 / self.height.max(1) as f64
    }

    fn render(&mut self, cam: &CameraState) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                resolution: [self.width as f32, self.height as f32],
                pan: [cam.pan_x as f32, cam.pan_y as f32],
                aspect: self.aspect() as f32,
                scale: (cam.scale * BASE_SCALE) as f32,
                point_size: cam.point_size_px(),
                _pad: 0.0,
            }),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.03,
                            g: 0.04,
                            b: 0.08,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(instance_vb) = &self.instance_vb {
                rpass.set_pipeline(&self.pipeline);
                rpass.set_bind_group(0, &self.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, instance_vb.slice(..));
                rpass.draw(0..6, 0..self.instance_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn load_dataset() -> PointBuffer {
    match std::env::args().nth(1) {
        Some(path) => match std::fs::read(&path) {
            Ok(bytes) => match PointBuffer::from_bytes(&bytes) {
                Ok(points) => {
                    log::info!("loaded {} points from {}", points.len(), path);
                    points
                }
                Err(e) => {
                    log::warn!("{}: {}", path, e);
                    demo_points(DEMO_POINT_COUNT, DEMO_SEED)
                }
            },
            Err(e) => {
                log::warn!("{}: {}", path, e);
                demo_points(DEMO_POINT_COUNT, DEMO_SEED)
            }
        },
        None => demo_points(DEMO_POINT_COUNT, DEMO_SEED),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let points = load_dataset();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("spiralpoints")
        .build(&event_loop)
        .expect("window");

    let mut state = match pollster::block_on(GpuState::new(&window)) {
        Ok(s) => s,
        Err(e) => {
            // No GPU is terminal for the viewer but should not panic.
            log::error!("GPU init error: {:?}", e);
            return;
        }
    };
    state.upload(&points);

    let mut camera = CameraState::new();
    let mut last_title = Instant::now();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => state.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                input::pointer_move(
                    &mut camera,
                    position.x,
                    position.y,
                    state.width as f64,
                    state.height as f64,
                );
            }
            Event::WindowEvent {
                event:
                    WindowEvent::MouseInput {
                        state: button_state,
                        button: MouseButton::Left,
                        ..
                    },
                ..
            } => match button_state {
                ElementState::Pressed => {
                    let (x, y) = camera.last_pointer;
                    input::pointer_down(&mut camera, x, y);
                }
                ElementState::Released => input::pointer_up(&mut camera),
            },
            Event::WindowEvent {
                event: WindowEvent::MouseWheel { delta, .. },
                ..
            } => {
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y as f64 * WHEEL_LINE_TO_DELTA,
                    MouseScrollDelta::PixelDelta(p) => -p.y,
                };
                input::wheel(&mut camera, delta_y);
            }
            Event::AboutToWait => {
                camera.smooth_step();
                // Zoom/cell readout in the title bar, throttled.
                if last_title.elapsed().as_millis() >= 200 {
                    last_title = Instant::now();
                    let cells = grid::visible_cells(&camera, state.aspect());
                    state.window.set_title(&format!(
                        "spiralpoints - {:.2}x - {} cells",
                        camera.scale,
                        cells.len()
                    ));
                }
                match state.render(&camera) {
                    Ok(_) => state.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(_) => {}
                }
            }
            _ => {}
        })
        .unwrap();
}
