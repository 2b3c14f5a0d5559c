use crate::assets::registry::TextureId;

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Shape primitive for a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
}

/// How the renderer shades a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialKind {
    /// Unlit: base color (or texture) only.
    Basic,
    /// Lit by the scene's point and ambient lights.
    #[default]
    Standard,
}

/// Surface description. The base color stays valid as the fallback while
/// a texture is pending or after it failed to load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: Rgb,
    pub emissive: Rgb,
    pub texture: Option<TextureId>,
}

impl Material {
    pub fn basic(color: Rgb) -> Self {
        Self {
            kind: MaterialKind::Basic,
            color,
            emissive: Rgb::BLACK,
            texture: None,
        }
    }

    pub fn standard(color: Rgb) -> Self {
        Self {
            kind: MaterialKind::Standard,
            ..Self::basic(color)
        }
    }
}

/// Renderable mesh attached to an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: Shape,
    pub material: Material,
}

impl MeshComponent {
    pub fn new(shape: Shape, material: Material) -> Self {
        Self { shape, material }
    }

    pub fn sphere(radius: f32, material: Material) -> Self {
        Self::new(Shape::Sphere { radius }, material)
    }

    pub fn with_emissive(mut self, emissive: Rgb) -> Self {
        self.material.emissive = emissive;
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.material.texture = Some(texture);
        self
    }

    pub fn radius(&self) -> f32 {
        match self.shape {
            Shape::Sphere { radius } => radius,
        }
    }
}
