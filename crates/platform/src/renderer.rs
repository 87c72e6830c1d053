use crate::error::PlatformError;
use egui::{ClippedPrimitive, Context as EguiContext, TexturesDelta, viewport::ViewportId};
use egui_wgpu::{
    Renderer as EguiWgpuRenderer, ScreenDescriptor,
    wgpu::{
        Color, CommandEncoderDescriptor, Device, DeviceDescriptor, Features, Instance,
        InstanceDescriptor, Limits, LoadOp, MemoryHints, Operations, PowerPreference, PresentMode,
        Queue, RenderPassColorAttachment, RenderPassDescriptor, RequestAdapterOptions, StoreOp,
        Surface, SurfaceConfiguration, SurfaceError, SurfaceTexture, TextureUsages,
        TextureViewDescriptor, Trace,
    },
};
use egui_winit::State as EguiWinitState;
use std::sync::Arc;
use winit::{dpi::PhysicalSize, event::WindowEvent, window::Window};

const CLEAR_COLOR: Color = Color::BLACK;

/// Tessellated output of one egui pass, ready to paint.
struct Pass {
    primitives: Vec<ClippedPrimitive>,
    textures: TexturesDelta,
    screen: ScreenDescriptor,
}

/// egui on wgpu for one window.
pub struct Renderer {
    egui_context: EguiContext,
    egui_state: EguiWinitState,
    egui_renderer: EguiWgpuRenderer,
    surface: Surface<'static>,
    device: Device,
    queue: Queue,
    surface_config: SurfaceConfiguration,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, PlatformError> {
        let egui_context = EguiContext::default();

        let egui_state = EguiWinitState::new(
            egui_context.clone(),
            ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let instance = Instance::new(&InstanceDescriptor::default());

        let surface = instance
            .create_surface(Arc::clone(&window))
            .map_err(|e| PlatformError::Surface(e.to_string()))?;

        let adapter = pollster::block_on(instance.request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .map_err(|e| PlatformError::Gpu(format!("no suitable adapter: {e}")))?;

        let (device, queue) = pollster::block_on(adapter.request_device(&DeviceDescriptor {
            label: Some("device"),
            required_features: Features::empty(),
            required_limits: Limits::default(),
            memory_hints: MemoryHints::Performance,
            trace: Trace::default(),
        }))
        .map_err(|e| PlatformError::Gpu(e.to_string()))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| PlatformError::Surface("no supported texture format".into()))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .ok_or_else(|| PlatformError::Surface("no supported alpha mode".into()))?;

        let size = window.inner_size();
        let config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 0,
        };
        surface.configure(&device, &config);
        log::debug!(target: "platform", "surface {}x{} {format:?}", config.width, config.height);

        let egui_renderer = EguiWgpuRenderer::new(&device, format, None, 1, true);

        Ok(Self {
            egui_context,
            egui_state,
            egui_renderer,
            surface,
            device,
            queue,
            surface_config: config,
        })
    }

    /// Feed a window event to egui; returns `true` if it wants a repaint.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).repaint
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.surface_config.width = new_size.width.max(1);
        self.surface_config.height = new_size.height.max(1);
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Run `build_ui` for one pass and present the result.
    pub fn render<F: FnOnce(&EguiContext)>(&mut self, window: &Window, build_ui: F) {
        let Some(frame) = self.acquire_frame() else {
            return;
        };
        let pass = self.run_pass(window, build_ui);
        self.present(frame, pass);
    }

    /// Next swapchain texture, or `None` when this frame should be skipped.
    fn acquire_frame(&mut self) -> Option<SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Some(frame),
            Err(SurfaceError::Lost) => {
                log::debug!(target: "platform", "surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                None
            }
            // Minimized or mid-resize; the next resize reconfigures.
            Err(SurfaceError::Outdated) => None,
            Err(err) => {
                log::warn!(target: "platform", "surface error: {err:?}");
                None
            }
        }
    }

    fn run_pass<F: FnOnce(&EguiContext)>(&mut self, window: &Window, build_ui: F) -> Pass {
        let raw_input = self.egui_state.take_egui_input(window);
        self.egui_context.begin_pass(raw_input);
        build_ui(&self.egui_context);
        let output = self.egui_context.end_pass();
        self.egui_state
            .handle_platform_output(window, output.platform_output);

        let pixels_per_point = self.egui_context.pixels_per_point();
        Pass {
            primitives: self.egui_context.tessellate(output.shapes, pixels_per_point),
            textures: output.textures_delta,
            screen: ScreenDescriptor {
                size_in_pixels: [self.surface_config.width, self.surface_config.height],
                pixels_per_point,
            },
        }
    }

    fn present(&mut self, frame: SurfaceTexture, pass: Pass) {
        let Pass {
            primitives,
            textures,
            screen,
        } = pass;
        let view = frame.texture.create_view(&TextureViewDescriptor::default());

        for (id, delta) in &textures.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("fieldbook frame"),
            });
        self.egui_renderer
            .update_buffers(&self.device, &self.queue, &mut encoder, &primitives, &screen);

        {
            let render_pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("fieldbook ui"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(CLEAR_COLOR),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui_renderer
                .render(&mut render_pass.forget_lifetime(), &primitives, &screen);
        }

        for id in &textures.free {
            self.egui_renderer.free_texture(id);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}
