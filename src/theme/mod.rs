//! Theme resolution: maps the host's color-scheme preference to a fixed
//! palette driving every color in a built chart configuration.

mod color;

pub use color::Color;

use tracing::debug;

/// Active display color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Seam for the ambient display-preference signal.
///
/// `None` means the host environment cannot report a preference; resolution
/// treats that as the light scheme. The provider is queried on every build so
/// a configuration always reflects the scheme at build time.
pub trait SchemeProvider {
    fn preferred_scheme(&self) -> Option<ColorScheme>;
}

impl SchemeProvider for ColorScheme {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        Some(*self)
    }
}

impl SchemeProvider for Option<ColorScheme> {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        *self
    }
}

/// Named color set driving all chart visuals for one configuration build.
///
/// `primary`, `success`, and `error` are scheme-invariant; the remaining
/// colors switch with the scheme. The palette is a plain value: once
/// resolved it never changes under a configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub scheme: ColorScheme,
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub background: Color,
    pub grid_line: Color,
}

const PRIMARY: Color = Color::rgb(0x19, 0x76, 0xd2);
const SUCCESS: Color = Color::rgb(0x4c, 0xaf, 0x50);
const ERROR: Color = Color::rgb(0xef, 0x53, 0x50);

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            primary: PRIMARY,
            success: SUCCESS,
            error: ERROR,
            text: Color::rgb(0x0f, 0x17, 0x2a),
            text_secondary: Color::rgb(0x47, 0x55, 0x69),
            border: Color::rgba(148, 163, 184, 0.2),
            background: Color::rgb(0xff, 0xff, 0xff),
            grid_line: Color::rgb(0xf3, 0xf4, 0xf6),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            primary: PRIMARY,
            success: SUCCESS,
            error: ERROR,
            text: Color::rgb(0xe3, 0xe8, 0xef),
            text_secondary: Color::rgb(0x94, 0xa3, 0xb8),
            border: Color::rgba(255, 255, 255, 0.1),
            background: Color::rgb(0x13, 0x2f, 0x4c),
            grid_line: Color::rgba(255, 255, 255, 0.05),
        }
    }

    #[must_use]
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}

/// Resolves the palette for the current ambient scheme.
///
/// Queries the provider fresh on every call; results are never memoized.
#[must_use]
pub fn resolve_theme(provider: &impl SchemeProvider) -> Palette {
    let scheme = provider.preferred_scheme().unwrap_or_default();
    debug!(scheme = ?scheme, "resolved chart theme");
    Palette::for_scheme(scheme)
}
