use super::schema::SCHEMA;
use rusqlite::{Connection, Result};

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    log::debug!("Activity schema is up to date");
    Ok(())
}
