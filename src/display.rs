//! # Text and JSON rendering of snapshots
//!
//! Borrowing renderers for a [`PositionSnapshot`], used by the `hilal` command-line tool.
//!
//! - [`SnapshotDisplay`] implements [`std::fmt::Display`]: a verdict banner, a `comfy-table`
//!   table of the Sun and Moon horizontal coordinates plus elongation, and the engine log line
//!   `UTC=hh:mm:ss | LST=…° | JD=…`.
//! - [`SnapshotReport`] is an owned, `serde`-serializable view of the same data, for `--json`.
//!
//! ## Precision
//!
//! Angles default to 4 decimals and the Julian Day to 5;
//! `with_angle_precision(p)` overrides the angle digits.
//!
//! ```rust
//! use hifitime::Epoch;
//! use hilal::display::SnapshotDisplay;
//! use hilal::engine::HilalEngine;
//!
//! let engine = HilalEngine::default();
//! let snap = engine.snapshot(&Epoch::from_gregorian_utc(2026, 2, 17, 10, 5, 0, 0));
//! let text = SnapshotDisplay::new(&snap, &engine).to_string();
//! assert!(text.contains("ISTIHALAH"));
//! ```

use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};
use serde::Serialize;

use crate::constants::Degree;
use crate::coordinates::HorizontalCoord;
use crate::engine::{HilalEngine, PositionSnapshot};
use crate::time::format_utc_clock;

/// Display adaptor rendering one snapshot as a status board.
pub struct SnapshotDisplay<'a> {
    snapshot: &'a PositionSnapshot,
    engine: &'a HilalEngine,
    angle_prec: usize,
}

impl<'a> SnapshotDisplay<'a> {
    pub fn new(snapshot: &'a PositionSnapshot, engine: &'a HilalEngine) -> Self {
        SnapshotDisplay {
            snapshot,
            engine,
            angle_prec: 4,
        }
    }

    pub fn with_angle_precision(mut self, prec: usize) -> Self {
        self.angle_prec = prec;
        self
    }

    fn deg(&self, x: Degree) -> String {
        format!("{:.*}°", self.angle_prec, x)
    }

    fn body_row(&self, name: &str, hz: &HorizontalCoord) -> Row {
        Row::from(vec![
            Cell::new(name),
            Cell::new(self.deg(hz.azimuth)).set_alignment(CellAlignment::Right),
            Cell::new(self.deg(hz.altitude)).set_alignment(CellAlignment::Right),
        ])
    }

    fn render_table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Body"),
            Cell::new("Azimuth"),
            Cell::new("Altitude"),
        ]);
        table.add_row(self.body_row("Sun", &self.snapshot.sun));
        table.add_row(self.body_row("Moon", &self.snapshot.moon));
        table.add_row(Row::from(vec![
            Cell::new("Elongation"),
            Cell::new(""),
            Cell::new(self.deg(self.snapshot.elongation)).set_alignment(CellAlignment::Right),
        ]));

        table.to_string()
    }
}

impl fmt::Display for SnapshotDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snap = self.snapshot;
        let site = self.engine.site();
        let offset = self.engine.config().utc_offset_hours;

        writeln!(
            f,
            "{} (lat {:.6}°, lon {:.6}°) | local {} (UTC{:+})",
            site.name.as_deref().unwrap_or("Observer"),
            site.latitude(),
            site.longitude(),
            self.engine.local_time(snap),
            offset
        )?;
        writeln!(
            f,
            "VISIBILITY STATUS: {} [{}]",
            snap.verdict.label(),
            snap.verdict.color()
        )?;
        writeln!(f, "{}", snap.verdict.rationale())?;
        writeln!(f, "{}", self.render_table())?;
        write!(
            f,
            "Engine log: UTC={} | LST={:.4}° | JD={:.5}",
            format_utc_clock(&snap.instant),
            snap.local_sidereal_time,
            snap.julian_day
        )
    }
}

/// Serializable summary of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotReport {
    pub site: Option<String>,
    pub latitude: Degree,
    pub longitude: Degree,
    pub instant_utc: String,
    pub local_time: String,
    pub julian_day: f64,
    pub local_sidereal_time: Degree,
    pub sun: HorizontalCoord,
    pub moon: HorizontalCoord,
    pub elongation: Degree,
    pub verdict: &'static str,
    pub rationale: &'static str,
    pub color: &'static str,
}

impl SnapshotReport {
    pub fn new(snapshot: &PositionSnapshot, engine: &HilalEngine) -> Self {
        let site = engine.site();
        let (y, m, d, hh, mm, ss, ns) = snapshot.instant.to_gregorian_utc();
        SnapshotReport {
            site: site.name.clone(),
            latitude: site.latitude(),
            longitude: site.longitude(),
            instant_utc: format!("{y:04}-{m:02}-{d:02}T{hh:02}:{mm:02}:{ss:02}.{:03}Z", ns / 1_000_000),
            local_time: engine.local_time(snapshot),
            julian_day: snapshot.julian_day,
            local_sidereal_time: snapshot.local_sidereal_time,
            sun: snapshot.sun,
            moon: snapshot.moon,
            elongation: snapshot.elongation,
            verdict: snapshot.verdict.label(),
            rationale: snapshot.verdict.rationale(),
            color: snapshot.verdict.color(),
        }
    }
}
