#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneKinds {
    #[default]
    Sphere,
    UvGradient,
}

impl SceneKinds {
    pub const ALL: &'static [Self] = &[Self::Sphere, Self::UvGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sphere => "Sphere",
            Self::UvGradient => "UV gradient",
        }
    }

    /// Name a scene script uses for `scene.kind`.
    #[must_use]
    pub const fn script_name(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::UvGradient => "uv_gradient",
        }
    }
}

impl std::fmt::Display for SceneKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
