use std::{fmt, str::FromStr};

use tracing::trace;

use super::{CellId, Rect};
use crate::GridError;

/// Names of the events a [`Grid`](crate::Grid) can fire.
///
/// # Example
/// ```
/// use sketchgrid::EventKind;
///
/// let kind: EventKind = "mouseIn".parse().unwrap();
/// assert_eq!(kind, EventKind::MouseIn);
/// assert_eq!(kind.name(), "mouseIn");
/// assert!("hover".parse::<EventKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EventKind {
    BeforeDraw,
    AfterDraw,
    Draw,
    DrawCell,
    DrawHeaderRow,
    DrawHeaderCol,
    DrawHeaderCorner,
    MouseClicked,
    MousePressed,
    MouseReleased,
    MouseIn,
    MouseOut,
}

impl EventKind {
    pub const COUNT: usize = 12;

    pub const ALL: [EventKind; EventKind::COUNT] = [
        EventKind::BeforeDraw,
        EventKind::AfterDraw,
        EventKind::Draw,
        EventKind::DrawCell,
        EventKind::DrawHeaderRow,
        EventKind::DrawHeaderCol,
        EventKind::DrawHeaderCorner,
        EventKind::MouseClicked,
        EventKind::MousePressed,
        EventKind::MouseReleased,
        EventKind::MouseIn,
        EventKind::MouseOut,
    ];

    /// The event name used for string registration.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::BeforeDraw => "beforeDraw",
            EventKind::AfterDraw => "afterDraw",
            EventKind::Draw => "draw",
            EventKind::DrawCell => "drawCell",
            EventKind::DrawHeaderRow => "drawHeaderRow",
            EventKind::DrawHeaderCol => "drawHeaderCol",
            EventKind::DrawHeaderCorner => "drawHeaderCorner",
            EventKind::MouseClicked => "mouseClicked",
            EventKind::MousePressed => "mousePressed",
            EventKind::MouseReleased => "mouseReleased",
            EventKind::MouseIn => "mouseIn",
            EventKind::MouseOut => "mouseOut",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = GridError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| GridError::UnknownEvent(name.to_string()))
    }
}

/// An event fired by a grid, with its payload.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GridEvent {
    BeforeDraw,
    AfterDraw,
    /// Unified draw event, fired for header and data cells alike.
    Draw { cell: CellId, bounds: Rect },
    DrawCell { col: usize, row: usize, bounds: Rect },
    DrawHeaderRow { col: usize, bounds: Rect },
    DrawHeaderCol { row: usize, bounds: Rect },
    DrawHeaderCorner { bounds: Rect },
    MouseClicked { cell: CellId },
    MousePressed { cell: CellId },
    MouseReleased { cell: CellId },
    MouseIn { cell: CellId },
    MouseOut { cell: CellId },
}

impl GridEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GridEvent::BeforeDraw => EventKind::BeforeDraw,
            GridEvent::AfterDraw => EventKind::AfterDraw,
            GridEvent::Draw { .. } => EventKind::Draw,
            GridEvent::DrawCell { .. } => EventKind::DrawCell,
            GridEvent::DrawHeaderRow { .. } => EventKind::DrawHeaderRow,
            GridEvent::DrawHeaderCol { .. } => EventKind::DrawHeaderCol,
            GridEvent::DrawHeaderCorner { .. } => EventKind::DrawHeaderCorner,
            GridEvent::MouseClicked { .. } => EventKind::MouseClicked,
            GridEvent::MousePressed { .. } => EventKind::MousePressed,
            GridEvent::MouseReleased { .. } => EventKind::MouseReleased,
            GridEvent::MouseIn { .. } => EventKind::MouseIn,
            GridEvent::MouseOut { .. } => EventKind::MouseOut,
        }
    }

    /// The cell this event concerns, if any.
    pub fn cell(&self) -> Option<CellId> {
        match *self {
            GridEvent::BeforeDraw | GridEvent::AfterDraw => None,
            GridEvent::Draw { cell, .. }
            | GridEvent::MouseClicked { cell }
            | GridEvent::MousePressed { cell }
            | GridEvent::MouseReleased { cell }
            | GridEvent::MouseIn { cell }
            | GridEvent::MouseOut { cell } => Some(cell),
            GridEvent::DrawCell { col, row, .. } => Some(CellId::Data { col, row }),
            GridEvent::DrawHeaderRow { col, .. } => Some(CellId::RowHeader { col }),
            GridEvent::DrawHeaderCol { row, .. } => Some(CellId::ColHeader { row }),
            GridEvent::DrawHeaderCorner { .. } => Some(CellId::Corner),
        }
    }

    /// Cell bounds carried by draw events.
    pub fn bounds(&self) -> Option<Rect> {
        match *self {
            GridEvent::Draw { bounds, .. }
            | GridEvent::DrawCell { bounds, .. }
            | GridEvent::DrawHeaderRow { bounds, .. }
            | GridEvent::DrawHeaderCol { bounds, .. }
            | GridEvent::DrawHeaderCorner { bounds } => Some(bounds),
            _ => None,
        }
    }
}

/// A registered event callback.
pub type Handler = Box<dyn FnMut(&GridEvent)>;

/// One handler slot per [`EventKind`].
#[derive(Default)]
pub(crate) struct Handlers {
    slots: [Option<Handler>; EventKind::COUNT],
}

impl Handlers {
    /// Stores `handler` for `kind`, replacing any earlier registration.
    pub(crate) fn set(&mut self, kind: EventKind, handler: Handler) {
        trace!("Registering handler for {}", kind);
        self.slots[kind.slot()] = Some(handler);
    }

    pub(crate) fn is_registered(&self, kind: EventKind) -> bool {
        self.slots[kind.slot()].is_some()
    }

    /// Invokes the handler for the event's kind; a missing handler is a no-op.
    pub(crate) fn fire(&mut self, event: GridEvent) {
        if let Some(handler) = self.slots[event.kind().slot()].as_mut() {
            handler(&event);
        }
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(
                EventKind::ALL
                    .into_iter()
                    .filter(|kind| self.is_registered(*kind))
                    .map(EventKind::name),
            )
            .finish()
    }
}
