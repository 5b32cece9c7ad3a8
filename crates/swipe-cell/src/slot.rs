//! Slot keys and slot contents.

use std::fmt;
use std::rc::Rc;

use swipe_ui_graphics::{Color, Size};

/// Which edge of the row a slot is revealed from.
///
/// Left slots show up when the row is dragged rightward, right slots when
/// it is dragged leftward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// One of the eight slot keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotPosition {
    Left1,
    Left2,
    Left3,
    Left4,
    Right1,
    Right2,
    Right3,
    Right4,
}

impl SlotPosition {
    pub const ALL: [SlotPosition; 8] = [
        SlotPosition::Left1,
        SlotPosition::Left2,
        SlotPosition::Left3,
        SlotPosition::Left4,
        SlotPosition::Right1,
        SlotPosition::Right2,
        SlotPosition::Right3,
        SlotPosition::Right4,
    ];

    /// Number of ranks on each side.
    pub const RANKS: u8 = 4;

    /// Key for `side` and `rank` (1-based); `None` when the rank is outside 1..=4.
    pub fn new(side: Side, rank: u8) -> Option<Self> {
        if !(1..=Self::RANKS).contains(&rank) {
            return None;
        }
        let offset = match side {
            Side::Left => 0,
            Side::Right => Self::RANKS as usize,
        };
        Some(Self::ALL[offset + rank as usize - 1])
    }

    pub fn side(self) -> Side {
        match self {
            SlotPosition::Left1
            | SlotPosition::Left2
            | SlotPosition::Left3
            | SlotPosition::Left4 => Side::Left,
            _ => Side::Right,
        }
    }

    /// 1-based rank within the side.
    pub fn rank(self) -> u8 {
        (self.index() % Self::RANKS as usize) as u8 + 1
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{}", self.side(), self.rank())
    }
}

/// How the row leaves once a drag is released on this slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotAnimation {
    /// Spring back to offset 0.
    Bounce,
    /// Carry the row fully off screen in the drag direction.
    Slide,
}

/// Icon handle shown in the overlay behind the row.
///
/// Only the name and intrinsic size matter here; the host maps the name to
/// whatever image it draws.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    pub name: String,
    pub size: Size,
}

impl Icon {
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

pub type SlotCallback<R> = Rc<dyn Fn(&R)>;

/// A configured action.
pub struct Slot<R> {
    pub color: Color,
    pub icon: Icon,
    pub animation: SlotAnimation,
    on_complete: SlotCallback<R>,
}

impl<R> Slot<R> {
    pub fn new(
        color: Color,
        icon: Icon,
        animation: SlotAnimation,
        on_complete: impl Fn(&R) + 'static,
    ) -> Self {
        Self {
            color,
            icon,
            animation,
            on_complete: Rc::new(on_complete),
        }
    }

    /// Shared handle to the completion callback.
    pub fn callback(&self) -> SlotCallback<R> {
        Rc::clone(&self.on_complete)
    }

    pub fn complete(&self, row: &R) {
        (self.on_complete)(row)
    }
}

impl<R> Clone for Slot<R> {
    fn clone(&self) -> Self {
        Self {
            color: self.color,
            icon: self.icon.clone(),
            animation: self.animation,
            on_complete: Rc::clone(&self.on_complete),
        }
    }
}

impl<R> fmt::Debug for Slot<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("color", &self.color)
            .field("icon", &self.icon)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}
