use std::marker::PhantomData;
use std::sync::Arc;

use crate::entities::profile::{Profile, ProfileUpdate};
use crate::errors::{EditorError, FieldError};
use crate::interfaces::api::ProfileApi;
use crate::interfaces::notifications::{Notifier, Toast};

/// Modal lifecycle, readable by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
    Saving,
}

/// One editable row of a section. Fields are addressed by name so inline
/// errors can be cleared per field.
pub trait FormEntry: Clone + Default {
    fn set(&mut self, field: &str, value: &str) -> Result<(), EditorError>;
}

/// The transformation between one profile sub-object and its form state.
pub trait FormSection {
    type Entry: FormEntry;

    /// Error-path prefix and update-body key, e.g. `education`.
    const LABEL: &'static str;

    /// Sections that edit a single object rather than a list.
    const SINGLETON: bool = false;

    fn load(profile: &Profile) -> Vec<Self::Entry>;

    /// Checks every entry and collects every violation; never stops at the
    /// first.
    fn validate(entries: &[Self::Entry]) -> Vec<FieldError>;

    fn build_update(entries: &[Self::Entry]) -> ProfileUpdate;

    fn removable(_entry: &Self::Entry) -> bool {
        true
    }
}

/// Error path for one entry, e.g. `education[2]` or `job_preferences`.
pub fn entry_path(label: &str, singleton: bool, index: usize) -> String {
    if singleton {
        label.to_string()
    } else {
        format!("{}[{}]", label, index)
    }
}

/// Drives one modal: load on open, field edits with per-field error
/// clearing, add/remove with the mandatory-entry rule, validate-then-save
/// with an explicit in-flight guard.
pub struct SectionEditor<S, A, N>
where
    S: FormSection,
    A: ProfileApi,
    N: Notifier,
{
    state: ModalState,
    entries: Vec<S::Entry>,
    errors: Vec<FieldError>,
    api: Arc<A>,
    notifier: Arc<N>,
    _section: PhantomData<S>,
}

impl<S, A, N> SectionEditor<S, A, N>
where
    S: FormSection,
    A: ProfileApi,
    N: Notifier,
{
    pub fn open(profile: &Profile, api: Arc<A>, notifier: Arc<N>) -> Self {
        SectionEditor {
            state: ModalState::Open,
            entries: S::load(profile),
            errors: Vec::new(),
            api,
            notifier,
            _section: PhantomData,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn entries(&self) -> &[S::Entry] {
        &self.entries
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The inline error recorded for one field of one entry, if any.
    pub fn error_for(&self, index: usize, field: &str) -> Option<&FieldError> {
        let path = field_path::<S>(index, field);
        self.errors.iter().find(|e| e.field == path)
    }

    fn ensure_editable(&self) -> Result<(), EditorError> {
        match self.state {
            ModalState::Open => Ok(()),
            ModalState::Saving => Err(EditorError::SaveInFlight),
            ModalState::Closed => Err(EditorError::ModalClosed),
        }
    }

    /// Mutates one field of one entry and clears any validation error
    /// previously recorded for exactly that field.
    pub fn set_field(&mut self, index: usize, field: &str, value: &str) -> Result<(), EditorError> {
        self.ensure_editable()?;

        let entry = self
            .entries
            .get_mut(index)
            .ok_or(EditorError::EntryOutOfRange(index))?;
        entry.set(field, value)?;

        let path = field_path::<S>(index, field);
        self.errors.retain(|e| e.field != path);
        Ok(())
    }

    /// Appends a blank entry and returns its index.
    pub fn add_entry(&mut self) -> Result<usize, EditorError> {
        self.ensure_editable()?;
        if S::SINGLETON {
            return Err(EditorError::SingleEntrySection);
        }
        self.entries.push(S::Entry::default());
        Ok(self.entries.len() - 1)
    }

    /// Removes the entry at `index`. A no-op — returning `false` — for
    /// mandatory entries, single-entry sections, and out-of-range indexes.
    pub fn remove_entry(&mut self, index: usize) -> bool {
        if self.ensure_editable().is_err() || S::SINGLETON {
            return false;
        }
        let Some(entry) = self.entries.get(index) else {
            return false;
        };
        if !S::removable(entry) {
            return false;
        }

        self.entries.remove(index);
        reindex_after_removal(&mut self.errors, S::LABEL, index);
        true
    }

    /// Runs the section's full validation pass and records the violations
    /// for inline display.
    pub fn validate(&mut self) -> Result<(), EditorError> {
        self.errors = S::validate(&self.entries);
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(EditorError::Validation(self.errors.clone()))
        }
    }

    /// Validates, serializes, and submits the section as one update. On
    /// success returns the canonical profile and closes the modal; on
    /// failure the form state is kept for retry.
    pub async fn save(&mut self) -> Result<Profile, EditorError> {
        self.ensure_editable()?;

        if let Err(err) = self.validate() {
            self.notifier
                .notify(Toast::error("Please fix the highlighted fields"));
            return Err(err);
        }

        self.state = ModalState::Saving;
        let update = S::build_update(&self.entries);

        match self.api.update_profile(&update).await {
            Ok(profile) => {
                self.state = ModalState::Closed;
                tracing::info!(section = S::LABEL, "profile section saved");
                self.notifier.notify(Toast::success("Profile updated"));
                Ok(profile)
            }
            Err(err) => {
                self.state = ModalState::Open;
                tracing::warn!(section = S::LABEL, error = %err, "profile update failed");
                self.notifier
                    .notify(Toast::error(format!("Could not save changes: {}", err)));
                Err(EditorError::Api(err))
            }
        }
    }

    /// Dismisses the modal without saving. An in-flight save cannot be
    /// aborted; closing is deferred until it settles.
    pub fn close(&mut self) {
        if self.state != ModalState::Saving {
            self.state = ModalState::Closed;
        }
    }
}

fn field_path<S: FormSection>(index: usize, field: &str) -> String {
    format!("{}.{}", entry_path(S::LABEL, S::SINGLETON, index), field)
}

/// Drops errors recorded for the removed row and shifts higher row indexes
/// down so inline errors stay attached to the right entries.
fn reindex_after_removal(errors: &mut Vec<FieldError>, label: &str, removed: usize) {
    let prefix = format!("{}[", label);

    errors.retain(|e| parse_index(&e.field, &prefix) != Some(removed));

    for error in errors.iter_mut() {
        if let Some(index) = parse_index(&error.field, &prefix) {
            if index > removed {
                let rest = &error.field[prefix.len() + index_digits(index)..];
                error.field = format!("{}{}{}", prefix, index - 1, rest);
            }
        }
    }
}

fn parse_index(field: &str, prefix: &str) -> Option<usize> {
    let rest = field.strip_prefix(prefix)?;
    let close = rest.find(']')?;
    rest[..close].parse().ok()
}

fn index_digits(index: usize) -> usize {
    index.to_string().len()
}
