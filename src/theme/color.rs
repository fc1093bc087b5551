use serde::{Serialize, Serializer};

/// RGB color with 8-bit channels and a unit-interval alpha.
///
/// Colors serialize as CSS color strings because the emitted configuration
/// object is consumed by renderers that speak CSS color syntax.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Returns the same color with a replaced alpha channel.
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self {
            red: self.red,
            green: self.green,
            blue: self.blue,
            alpha,
        }
    }

    /// Renders the CSS form: `#rrggbb` when fully opaque, `rgba(...)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.alpha >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            let alpha = self.alpha.clamp(0.0, 1.0);
            format!(
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, alpha
            )
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}
