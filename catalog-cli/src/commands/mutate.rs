//! Add, edit and delete commands

use super::{load, print_notices, FormArgs, Session};
use anyhow::{bail, Result};
use catalog_core::{EntityKind, FormValues, Outcome};

/// Create a record from the given flags
pub async fn add(catalog: &mut Session, kind: EntityKind, fields: &FormArgs) -> Result<()> {
    let mut notices = catalog.subscribe();

    let mut values = FormValues::empty(kind);
    fields.apply(&mut values)?;
    catalog.open_create(kind);
    catalog.modal_mut(kind).set_values(values);

    let outcome = catalog.submit_open(kind).await;
    print_notices(&mut notices);
    finish(kind, outcome, "saved")
}

/// Edit a record: the form is pre-filled from the cache, then the flags apply
pub async fn edit(
    catalog: &mut Session,
    kind: EntityKind,
    id: i64,
    fields: &FormArgs,
) -> Result<()> {
    let mut notices = catalog.subscribe();
    load(catalog).await?;

    let Some(record) = catalog.find(kind, id) else {
        print_notices(&mut notices);
        bail!("{} {} not found", kind.label(), id);
    };

    if !catalog.open_edit(record) {
        tracing::info!("Form data incomplete, reloading selections");
        catalog.refresh_selections().await;
    }

    let Some(mut values) = catalog.modal(kind).values().cloned() else {
        catalog.cancel(kind);
        print_notices(&mut notices);
        bail!(
            "Could not load the data needed to edit {} {}",
            kind.label().to_lowercase(),
            id
        );
    };
    fields.apply(&mut values)?;
    catalog.modal_mut(kind).set_values(values);

    let outcome = catalog.submit_open(kind).await;
    print_notices(&mut notices);
    finish(kind, outcome, "saved")
}

pub async fn delete(catalog: &mut Session, kind: EntityKind, id: i64) -> Result<()> {
    let mut notices = catalog.subscribe();
    let outcome = catalog.remove(kind, id).await;
    print_notices(&mut notices);
    finish(kind, outcome, "deleted")
}

fn finish(kind: EntityKind, outcome: Outcome, verb: &str) -> Result<()> {
    match outcome {
        Outcome::Saved => Ok(()),
        Outcome::Invalid(errors) => {
            for error in &errors.errors {
                eprintln!("  {}: {}", error.field, error.message);
            }
            bail!("{} form is invalid", kind.label())
        }
        Outcome::Failed(_) => bail!("{} was not {}", kind.label(), verb),
    }
}
