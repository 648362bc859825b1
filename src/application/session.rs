// src/application/session.rs
//
// Adoption session: walks a cursor over the showcase, one dog at a time.
//
// The cursor belongs to the presentation side. The service only moves
// dogs between lists; this type keeps the cursor pointing at the same dog
// when an adoption is made, undone or redone.

use crate::domain::Dog;
use crate::error::{AppError, AppResult};
use crate::history::{Command, ShowcasePosition};
use crate::repositories::Showcase;
use crate::services::ShelterService;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdoptionSession {
    generation: Option<u64>,
    cursor: Option<usize>,
}

/// What happened to the session after an adoption
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdoptionOutcome {
    /// More dogs to show; the cursor is on the next one
    Continue(Dog),
    /// The showcase ran out of dogs and the session stopped
    Exhausted,
}

impl AdoptionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start walking `showcase`. Returns false (and stays stopped) when
    /// there is nothing to show.
    pub fn start(&mut self, showcase: &Showcase) -> bool {
        if showcase.dogs().is_empty() {
            *self = Self::default();
            return false;
        }
        self.generation = Some(showcase.generation());
        self.cursor = Some(0);
        true
    }

    pub fn is_active(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn stop(&mut self, service: &mut ShelterService) {
        *self = Self::default();
        service.stop_showing();
    }

    /// Dog under the cursor
    pub fn current<'a>(&self, service: &'a ShelterService) -> Option<&'a Dog> {
        let cursor = self.cursor?;
        self.showcase(service)?.dogs().get(cursor)
    }

    /// Move to the next dog, wrapping around to the first
    pub fn advance<'a>(&mut self, service: &'a ShelterService) -> Option<&'a Dog> {
        let len = self.showcase(service)?.dogs().len();
        let cursor = self.cursor?;
        let next = if cursor + 1 >= len { 0 } else { cursor + 1 };
        self.cursor = Some(next);
        self.current(service)
    }

    /// Adopt the dog under the cursor
    pub fn adopt_current(&mut self, service: &mut ShelterService) -> AppResult<AdoptionOutcome> {
        let dog = self
            .current(service)
            .cloned()
            .ok_or_else(|| AppError::Other("No dog is being shown".to_string()))?;

        service.adopt(&dog)?;

        // The adopted dog left the showcase; the cursor now sits on its
        // successor unless it fell off the end.
        match self.clamp(service) {
            Some(next) => Ok(AdoptionOutcome::Continue(next.clone())),
            None => {
                self.stop(service);
                Ok(AdoptionOutcome::Exhausted)
            }
        }
    }

    /// Keep the cursor on the same dog after `command` was undone
    pub fn after_undo(&mut self, command: &Command, service: &ShelterService) {
        let (Some(pos), Some(cursor)) = (self.tracked_position(command), self.cursor) else {
            return;
        };
        let restored = self
            .showcase(service)
            .and_then(|s| s.dogs().get(pos.index))
            .is_some_and(|d| d.same_identity(command.dog()));
        if restored && cursor >= pos.index {
            self.cursor = Some(cursor + 1);
        }
    }

    /// Keep the cursor on the same dog (or its successor) after `command`
    /// was redone
    pub fn after_redo(&mut self, command: &Command, service: &mut ShelterService) {
        let (Some(pos), Some(cursor)) = (self.tracked_position(command), self.cursor) else {
            return;
        };
        let removed = self
            .showcase(service)
            .is_some_and(|s| !s.dogs().contains(command.dog()));
        if !removed {
            return;
        }
        if cursor > pos.index {
            self.cursor = Some(cursor - 1);
        }
        if self.clamp(service).is_none() {
            self.stop(service);
        }
    }

    fn tracked_position(&self, command: &Command) -> Option<ShowcasePosition> {
        command
            .showcase_position()
            .filter(|pos| Some(pos.generation) == self.generation)
    }

    fn showcase<'a>(&self, service: &'a ShelterService) -> Option<&'a Showcase> {
        let generation = self.generation?;
        service
            .showcase()
            .filter(|s| s.generation() == generation)
    }

    /// Wrap the cursor back to the start if it points past the end.
    /// Returns the dog now under the cursor, if any.
    fn clamp<'a>(&mut self, service: &'a ShelterService) -> Option<&'a Dog> {
        let len = self.showcase(service)?.dogs().len();
        if len == 0 {
            return None;
        }
        if self.cursor.is_some_and(|c| c >= len) {
            self.cursor = Some(0);
        }
        self.current(service)
    }
}
