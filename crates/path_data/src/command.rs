use anyhow::Result;
use strum_macros::{Display, EnumCount, EnumIter};

use crate::error::CommandError;

/// Every drawing command the path data format knows about.
///
/// Uppercase symbols take absolute coordinates, lowercase ones are relative
/// to the current point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum CommandKind {
    MoveToAbsolute,
    MoveToRelative,
    LineToAbsolute,
    LineToRelative,
    HorizontalLineAbsolute,
    HorizontalLineRelative,
    VerticalLineAbsolute,
    VerticalLineRelative,
    CubicCurveAbsolute,
    CubicCurveRelative,
    ShortCubicCurveAbsolute,
    ShortCubicCurveRelative,
    QuadraticCurveAbsolute,
    QuadraticCurveRelative,
    ShortQuadraticCurveAbsolute,
    ShortQuadraticCurveRelative,
    ArcAbsolute,
    ArcRelative,
    ClosePath,
}

impl CommandKind {
    /// Number of parameters a command of this kind must carry
    pub fn arity(self) -> usize {
        use CommandKind::*;
        match self {
            MoveToAbsolute | MoveToRelative | LineToAbsolute | LineToRelative => 2,
            HorizontalLineAbsolute
            | HorizontalLineRelative
            | VerticalLineAbsolute
            | VerticalLineRelative => 1,
            CubicCurveAbsolute | CubicCurveRelative => 6,
            ShortCubicCurveAbsolute | ShortCubicCurveRelative => 4,
            QuadraticCurveAbsolute | QuadraticCurveRelative => 4,
            ShortQuadraticCurveAbsolute | ShortQuadraticCurveRelative => 2,
            ArcAbsolute | ArcRelative => 7,
            ClosePath => 0,
        }
    }

    pub fn symbol(self) -> char {
        use CommandKind::*;
        match self {
            MoveToAbsolute => 'M',
            MoveToRelative => 'm',
            LineToAbsolute => 'L',
            LineToRelative => 'l',
            HorizontalLineAbsolute => 'H',
            HorizontalLineRelative => 'h',
            VerticalLineAbsolute => 'V',
            VerticalLineRelative => 'v',
            CubicCurveAbsolute => 'C',
            CubicCurveRelative => 'c',
            ShortCubicCurveAbsolute => 'S',
            ShortCubicCurveRelative => 's',
            QuadraticCurveAbsolute => 'Q',
            QuadraticCurveRelative => 'q',
            ShortQuadraticCurveAbsolute => 'T',
            ShortQuadraticCurveRelative => 't',
            ArcAbsolute => 'A',
            ArcRelative => 'a',
            // always lowercase, there is no relative form
            ClosePath => 'z',
        }
    }

    pub fn is_relative(self) -> bool {
        self != CommandKind::ClosePath && self.symbol().is_ascii_lowercase()
    }

    pub fn is_absolute(self) -> bool {
        !self.is_relative()
    }
}

/// Converts an arc flag to the `0`/`1` number the format expects.
pub fn arc_flag(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// A single drawing command: its kind plus its parameters, in output order.
///
/// Nothing stops a command from carrying the wrong number of parameters;
/// use [`Command::is_well_formed`] or [`Command::validate`] to check.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    kind: CommandKind,
    parameters: Vec<f64>,
}

impl Command {
    pub fn new(kind: CommandKind, parameters: Vec<f64>) -> Self {
        Command { kind, parameters }
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    pub fn is_well_formed(&self) -> bool {
        self.parameters.len() == self.kind.arity()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_well_formed() {
            return Ok(());
        }
        Err(CommandError::Arity {
            kind: self.kind,
            got: self.parameters.len(),
            want: self.kind.arity(),
        }
        .into())
    }

    pub fn move_to_abs(x: f64, y: f64) -> Self {
        Command::new(CommandKind::MoveToAbsolute, vec![x, y])
    }

    pub fn move_to_rel(dx: f64, dy: f64) -> Self {
        Command::new(CommandKind::MoveToRelative, vec![dx, dy])
    }

    pub fn line_to_abs(x: f64, y: f64) -> Self {
        Command::new(CommandKind::LineToAbsolute, vec![x, y])
    }

    pub fn line_to_rel(dx: f64, dy: f64) -> Self {
        Command::new(CommandKind::LineToRelative, vec![dx, dy])
    }

    pub fn horizontal_line_abs(x: f64) -> Self {
        Command::new(CommandKind::HorizontalLineAbsolute, vec![x])
    }

    pub fn horizontal_line_rel(dx: f64) -> Self {
        Command::new(CommandKind::HorizontalLineRelative, vec![dx])
    }

    pub fn vertical_line_abs(y: f64) -> Self {
        Command::new(CommandKind::VerticalLineAbsolute, vec![y])
    }

    pub fn vertical_line_rel(dy: f64) -> Self {
        Command::new(CommandKind::VerticalLineRelative, vec![dy])
    }

    /// Cubic bezier from the current point through two control points to `(x, y)`.
    pub fn cubic_curve_abs(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        Command::new(CommandKind::CubicCurveAbsolute, vec![x1, y1, x2, y2, x, y])
    }

    pub fn cubic_curve_rel(dx1: f64, dy1: f64, dx2: f64, dy2: f64, dx: f64, dy: f64) -> Self {
        Command::new(
            CommandKind::CubicCurveRelative,
            vec![dx1, dy1, dx2, dy2, dx, dy],
        )
    }

    /// The first control point is the reflection of the previous curve's second one.
    pub fn short_cubic_curve_abs(x2: f64, y2: f64, x: f64, y: f64) -> Self {
        Command::new(CommandKind::ShortCubicCurveAbsolute, vec![x2, y2, x, y])
    }

    pub fn short_cubic_curve_rel(dx2: f64, dy2: f64, dx: f64, dy: f64) -> Self {
        Command::new(CommandKind::ShortCubicCurveRelative, vec![dx2, dy2, dx, dy])
    }

    pub fn quadratic_curve_abs(x1: f64, y1: f64, x: f64, y: f64) -> Self {
        Command::new(CommandKind::QuadraticCurveAbsolute, vec![x1, y1, x, y])
    }

    pub fn quadratic_curve_rel(dx1: f64, dy1: f64, dx: f64, dy: f64) -> Self {
        Command::new(CommandKind::QuadraticCurveRelative, vec![dx1, dy1, dx, dy])
    }

    pub fn short_quadratic_curve_abs(x: f64, y: f64) -> Self {
        Command::new(CommandKind::ShortQuadraticCurveAbsolute, vec![x, y])
    }

    pub fn short_quadratic_curve_rel(dx: f64, dy: f64) -> Self {
        Command::new(CommandKind::ShortQuadraticCurveRelative, vec![dx, dy])
    }

    /// Elliptical arc to `(x, y)`.
    ///
    /// `large_arc` and `sweep` are passed through as-is and should be `0` or `1`,
    /// see [`arc_flag`].
    pub fn arc_abs(
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: f64,
        sweep: f64,
        x: f64,
        y: f64,
    ) -> Self {
        Command::new(
            CommandKind::ArcAbsolute,
            vec![rx, ry, x_axis_rotation, large_arc, sweep, x, y],
        )
    }

    pub fn arc_rel(
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: f64,
        sweep: f64,
        dx: f64,
        dy: f64,
    ) -> Self {
        Command::new(
            CommandKind::ArcRelative,
            vec![rx, ry, x_axis_rotation, large_arc, sweep, dx, dy],
        )
    }

    pub fn close_path() -> Self {
        Command::new(CommandKind::ClosePath, vec![])
    }
}
