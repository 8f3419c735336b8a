use render::command::Color;

/// Ten-class categorical palette (the classic "category 10" scheme).
pub const CATEGORY10: [Color; 10] = [
    [0.122, 0.467, 0.706, 1.0], // #1f77b4
    [1.0, 0.498, 0.055, 1.0],   // #ff7f0e
    [0.173, 0.627, 0.173, 1.0], // #2ca02c
    [0.839, 0.153, 0.157, 1.0], // #d62728
    [0.580, 0.404, 0.741, 1.0], // #9467bd
    [0.549, 0.337, 0.294, 1.0], // #8c564b
    [0.890, 0.467, 0.761, 1.0], // #e377c2
    [0.498, 0.498, 0.498, 1.0], // #7f7f7f
    [0.737, 0.741, 0.133, 1.0], // #bcbd22
    [0.090, 0.745, 0.812, 1.0], // #17becf
];

/// Ordinal color scale: keys are assigned palette entries in first-seen
/// order and keep their color for the lifetime of the scale.
#[derive(Debug, Default)]
pub struct CategoricalScale {
    seen: Vec<String>,
}

impl CategoricalScale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&mut self, key: &str) -> Color {
        let index = match self.seen.iter().position(|k| k == key) {
            Some(i) => i,
            None => {
                self.seen.push(key.to_string());
                self.seen.len() - 1
            }
        };
        CATEGORY10[index % CATEGORY10.len()]
    }
}

/// Stable per-object key and label: every digit run in the display name,
/// concatenated. Names without digits fall back to the full name so the
/// object still gets a color and a label.
pub fn label_token(display_name: &str) -> String {
    let digits: String = display_name
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        display_name.to_string()
    } else {
        digits
    }
}
