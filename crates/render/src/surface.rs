use crate::command::DrawCommand;

/// An ordered list of retained draw commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Surface {
    commands: Vec<DrawCommand>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// The map's drawing target: one static base surface painted exactly once
/// per map load, and one dynamic surface cleared and repainted every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MapCanvas {
    pub width: f64,
    pub height: f64,
    base: Surface,
    track: Surface,
}

impl MapCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            base: Surface::new(),
            track: Surface::new(),
        }
    }

    pub fn base(&self) -> &Surface {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut Surface {
        &mut self.base
    }

    pub fn track(&self) -> &Surface {
        &self.track
    }

    pub fn track_mut(&mut self) -> &mut Surface {
        &mut self.track
    }
}
