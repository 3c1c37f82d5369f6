use shared_models::{Entry, HealthCheckEntry, HospitalEntry, OccupationalHealthcareEntry};

/// Variant-specific processing for medical entries.
///
/// Every variant has its own required method, and each method only sees the fields of its
/// variant plus the shared envelope. A new `Entry` variant fails to compile in [`dispatch`]
/// until a method for it exists here and every handler implements it.
pub trait EntryHandler {
    type Output;

    fn hospital(&mut self, entry: &HospitalEntry) -> Self::Output;

    fn health_check(&mut self, entry: &HealthCheckEntry) -> Self::Output;

    fn occupational_healthcare(&mut self, entry: &OccupationalHealthcareEntry) -> Self::Output;
}

/// Routes one entry to the handler method for its variant.
pub fn dispatch<H>(entry: &Entry, handler: &mut H) -> H::Output
where
    H: EntryHandler + ?Sized,
{
    // No wildcard arm: exhaustiveness is checked by the compiler.
    match entry {
        Entry::Hospital(entry) => handler.hospital(entry),
        Entry::HealthCheck(entry) => handler.health_check(entry),
        Entry::OccupationalHealthcare(entry) => handler.occupational_healthcare(entry),
    }
}

/// Dispatches every entry in sequence order.
pub fn dispatch_all<'a, H, I>(entries: I, handler: &mut H) -> Vec<H::Output>
where
    H: EntryHandler + ?Sized,
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .map(|entry| dispatch(entry, &mut *handler))
        .collect()
}
