use wasm_bindgen::JsCast;
use web_sys as web;
use web_sys::WebGlRenderingContext as GL;

use field_core::{backing_size, Variant};

use crate::constants::CONTEXT_NAMES;

/// Exclusive owner of the canvas backing store and its pixel dimensions.
pub struct Surface {
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    gl: GL,
    width: u32,
    height: u32,
}

impl Surface {
    /// Try the acceptable context names in order. `None` means WebGL is
    /// unavailable and the caller must leave the static background alone.
    pub fn acquire(window: web::Window, canvas: web::HtmlCanvasElement) -> Option<Self> {
        let attributes = web::WebGlContextAttributes::new();
        attributes.set_antialias(true);
        attributes.set_premultiplied_alpha(false);
        attributes.set_alpha(true);

        let gl = CONTEXT_NAMES.iter().find_map(|name| {
            canvas
                .get_context_with_context_options(name, attributes.as_ref())
                .ok()
                .flatten()
                .and_then(|ctx| ctx.dyn_into::<GL>().ok())
        })?;

        // Only the grid pixels should show; the page gradient stays behind.
        _ = canvas.style().set_property("background", "transparent");

        Some(Self {
            window,
            canvas,
            gl,
            width: 0,
            height: 0,
        })
    }

    pub fn gl(&self) -> &GL {
        &self.gl
    }

    /// Reconcile the backing store with the displayed CSS size. Returns the
    /// new pixel size when it changed, `None` when nothing had to happen.
    pub fn ensure_size(&mut self) -> Option<(u32, u32)> {
        let rect = self.canvas.get_bounding_client_rect();
        let (width, height) =
            backing_size(rect.width(), rect.height(), self.window.device_pixel_ratio());
        if width == self.width && height == self.height {
            return None;
        }
        self.width = width;
        self.height = height;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Some((width, height))
    }
}

/// Compiled two-stage program plus its attribute and uniform handles.
pub struct FieldProgram {
    program: web::WebGlProgram,
    position: u32,
    u_time: Option<web::WebGlUniformLocation>,
    u_resolution: Option<web::WebGlUniformLocation>,
    u_accent: Option<web::WebGlUniformLocation>,
    u_vertical: Option<web::WebGlUniformLocation>,
    u_variant_index: Option<web::WebGlUniformLocation>,
    u_burst: Option<web::WebGlUniformLocation>,
}

impl FieldProgram {
    /// Compile and link both stages. Failures carry the backend's diagnostic
    /// log; the caller reports them and aborts initialization.
    pub fn build(gl: &GL, vert_src: &str, frag_src: &str) -> Result<Self, String> {
        let vert = compile(gl, GL::VERTEX_SHADER, vert_src)?;
        let frag = compile(gl, GL::FRAGMENT_SHADER, frag_src)?;

        let program = gl
            .create_program()
            .ok_or_else(|| "createProgram returned null".to_string())?;
        gl.attach_shader(&program, &vert);
        gl.attach_shader(&program, &frag);
        gl.link_program(&program);
        if !gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            let log = gl.get_program_info_log(&program).unwrap_or_default();
            gl.delete_program(Some(&program));
            return Err(format!("program link failed: {log}"));
        }

        let position = gl.get_attrib_location(&program, "a_position");
        if position < 0 {
            gl.delete_program(Some(&program));
            return Err("a_position attribute missing from linked program".to_string());
        }

        Ok(Self {
            position: position as u32,
            u_time: gl.get_uniform_location(&program, "u_time"),
            u_resolution: gl.get_uniform_location(&program, "u_resolution"),
            u_accent: gl.get_uniform_location(&program, "u_accent"),
            u_vertical: gl.get_uniform_location(&program, "u_vertical"),
            u_variant_index: gl.get_uniform_location(&program, "u_variant_index"),
            u_burst: gl.get_uniform_location(&program, "u_burst"),
            program,
        })
    }
}

fn compile(gl: &GL, stage: u32, source: &str) -> Result<web::WebGlShader, String> {
    let shader = gl
        .create_shader(stage)
        .ok_or_else(|| "createShader returned null".to_string())?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        return Ok(shader);
    }
    let log = gl.get_shader_info_log(&shader).unwrap_or_default();
    gl.delete_shader(Some(&shader));
    let name = if stage == GL::VERTEX_SHADER {
        "vertex"
    } else {
        "fragment"
    };
    Err(format!("{name} shader compile failed: {log}"))
}

// Full-viewport quad, two triangles, uploaded once.
const QUAD_VERTICES: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, //
    -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
];

/// Draw path: one static quad, uniforms refreshed every frame.
pub struct FieldRenderer {
    surface: Surface,
    program: FieldProgram,
}

impl FieldRenderer {
    pub fn new(surface: Surface, program: FieldProgram) -> Self {
        let gl = surface.gl();
        gl.use_program(Some(&program.program));
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        let quad = gl.create_buffer();
        gl.bind_buffer(GL::ARRAY_BUFFER, quad.as_ref());
        let vertices = js_sys::Float32Array::from(QUAD_VERTICES.as_slice());
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);
        gl.enable_vertex_attrib_array(program.position);
        gl.vertex_attrib_pointer_with_i32(program.position, 2, GL::FLOAT, false, 0, 0);

        Self { surface, program }
    }

    /// Cheap per-frame size check; touches the viewport and resolution
    /// uniform only when the backing store actually changed.
    pub fn ensure_size(&mut self) {
        if let Some((width, height)) = self.surface.ensure_size() {
            let gl = self.surface.gl();
            gl.viewport(0, 0, width as i32, height as i32);
            gl.uniform2f(
                self.program.u_resolution.as_ref(),
                width as f32,
                height as f32,
            );
        }
    }

    pub fn draw(&self, time: f32, variant: Variant, burst: f32) {
        let gl = self.surface.gl();
        gl.clear(GL::COLOR_BUFFER_BIT);

        gl.uniform1f(self.program.u_time.as_ref(), time);
        gl.uniform1f(
            self.program.u_variant_index.as_ref(),
            variant.index() as f32,
        );
        gl.uniform1f(self.program.u_burst.as_ref(), burst);
        let accent = variant.accent();
        gl.uniform3f(self.program.u_accent.as_ref(), accent.x, accent.y, accent.z);
        let vertical = variant.vertical();
        gl.uniform3f(
            self.program.u_vertical.as_ref(),
            vertical.x,
            vertical.y,
            vertical.z,
        );

        gl.draw_arrays(GL::TRIANGLES, 0, 6);
    }
}
