//! Dataset seeding
//!
//! Creates and fills the four narrative tables. Runs once, at `casefile
//! seed` time or on first server start; the pipeline itself never writes.
//!
//! The rows are arranged so that every case's reference query returns at
//! least one row, and so that the story holds together: the guard Foma
//! slips out of camp at night, takes sixty coins from the paymaster, and
//! meets a Horde envoy at the river ford.

use std::path::Path;

use rusqlite::Connection;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS camp_logs (
    log_id INTEGER PRIMARY KEY,
    guard_name VARCHAR(100),
    date DATE,
    shift VARCHAR(50),
    action VARCHAR(50),
    time TIME,
    notes TEXT
);

CREATE TABLE IF NOT EXISTS finances (
    trans_id INTEGER PRIMARY KEY,
    recipient_name VARCHAR(100),
    amount INTEGER,
    transaction_date DATE
);

CREATE TABLE IF NOT EXISTS movement_records (
    move_id INTEGER PRIMARY KEY,
    main_person VARCHAR(100),
    companion VARCHAR(100),
    route VARCHAR(100),
    date DATE,
    notes TEXT
);

CREATE TABLE IF NOT EXISTS secret_negotiations (
    neg_id INTEGER PRIMARY KEY,
    person_name VARCHAR(100),
    contact_type VARCHAR(50),
    date DATE,
    details TEXT
);
";

const ROWS: &str = "
DELETE FROM camp_logs;
DELETE FROM finances;
DELETE FROM movement_records;
DELETE FROM secret_negotiations;

INSERT INTO camp_logs VALUES
    (1, 'Yeremey', '1380-09-06', 'day',   'entry',  '06:00:00', 'Relieved the night watch'),
    (2, 'Foma',    '1380-09-06', 'night', 'entry',  '21:00:00', 'Took the southern post'),
    (3, 'Zakhar',  '1380-09-06', 'night', 'patrol', '23:30:00', 'Quiet along the palisade'),
    (4, 'Foma',    '1380-09-06', 'night', 'exit',   '23:45:00', 'Claimed to check the horse lines'),
    (5, 'Foma',    '1380-09-07', 'night', 'exit',   '01:15:00', 'Left through the south gate again'),
    (6, 'Zakhar',  '1380-09-07', 'night', 'entry',  '02:00:00', 'Returned from patrol'),
    (7, 'Yeremey', '1380-09-07', 'day',   'exit',   '07:30:00', 'Escorted the supply cart'),
    (8, 'Avdey',   '1380-09-07', 'day',   'entry',  '08:00:00', NULL);

INSERT INTO finances VALUES
    (1, 'Yeremey',          20, '1380-09-05'),
    (2, 'Foma',             60, '1380-09-06'),
    (3, 'Blacksmith Danila', 35, '1380-09-06'),
    (4, 'Marfa',            80, '1380-09-06'),
    (5, 'Foma',             15, '1380-09-07'),
    (6, 'Gleb',             55, '1380-09-04');

INSERT INTO movement_records VALUES
    (1, 'Foma',          'stranger in a grey cloak', 'River',       '1380-09-07', 'Crossed at the old ford after midnight'),
    (2, 'Marfa',         NULL,                       'Market road', '1380-09-07', 'Carried a basket of linen'),
    (3, 'Gleb',          'Avdey',                    'Forest trail','1380-09-06', 'Hunting party'),
    (4, 'Zakhar',        NULL,                       'River',       '1380-09-06', 'Watered the horses'),
    (5, 'Merchant Osip', 'two carts',                'Market road', '1380-09-07', 'Waited near the ford until dusk');

INSERT INTO secret_negotiations VALUES
    (1, 'Foma',  'envoy',   '1380-09-06', 'Spoke with a Horde envoy beyond the pickets'),
    (2, 'Marfa', 'none',    '1380-09-06', 'Evening gathering at the well'),
    (3, 'Gleb',  NULL,      '1380-09-05', 'Seen whispering near the stables'),
    (4, 'Osip',  'courier', '1380-09-07', 'Received a sealed letter');
";

/// Create the tables and load the narrative rows
pub fn seed(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)?;
    conn.execute_batch(ROWS)
}

/// Create and seed a database file, replacing any existing rows
pub fn seed_file(path: &Path) -> rusqlite::Result<()> {
    let conn = Connection::open(path)?;
    seed(&conn)
}
