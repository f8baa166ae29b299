//! Cut list export demo: builds a small bookshelf and prints its cut list.
//!
//! Usage:
//! ```text
//! cargo run --example export                      # plain-text table
//! cargo run --example export -- JSON              # any format name
//! RUST_LOG=geolis_cutlist=debug cargo run --example export
//! ```

use std::f64::consts::FRAC_PI_2;

use geolis_cutlist::assembly::{BodyData, Design, Entity, Material, OccurrenceData};
use geolis_cutlist::format::Format;
use geolis_cutlist::math::{Isometry3, Point3, Vector3};
use geolis_cutlist::operations::creation::{MakeBox, MakeCylinder};
use geolis_cutlist::topology::TopologyStore;
use geolis_cutlist::{export, CutlistError, ExportOptions};

fn main() -> Result<(), CutlistError> {
    // Default: WARN for everything, INFO for the export summary.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geolis_cutlist=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let format = match std::env::args().nth(1) {
        Some(name) => name.parse::<Format>()?,
        None => Format::Table,
    };

    let mut store = TopologyStore::new();
    let mut design = Design::new();
    let oak = Material::new("Oak");

    let root = design.add_component("Bookshelf");
    let side = MakeBox::new(Point3::origin(), Point3::new(18.0, 300.0, 900.0))
        .execute(&mut store)?;
    let shelf = MakeBox::new(Point3::origin(), Point3::new(564.0, 300.0, 18.0))
        .execute(&mut store)?;
    let dowel = MakeCylinder::new(Point3::origin(), 4.0, Vector3::x(), 30.0)
        .execute(&mut store)?;

    let side_part = design.add_component("Side");
    design.add_body(side_part, BodyData::new("Panel", side).with_material(oak.clone()))?;
    let shelf_part = design.add_component("Shelf");
    design.add_body(shelf_part, BodyData::new("Board", shelf).with_material(oak))?;
    let dowel_part = design.add_component("Dowel");
    let beech = Material::new("Beech");
    design.add_body(dowel_part, BodyData::new("Pin", dowel).with_material(beech))?;

    for (i, x) in [0.0, 582.0].into_iter().enumerate() {
        let placement = Isometry3::translation(x, 0.0, 0.0);
        design.add_occurrence(
            root,
            OccurrenceData::new(format!("Side:{}", i + 1), side_part).with_transform(placement),
        )?;
    }
    for (i, z) in [0.0, 300.0, 600.0, 882.0].into_iter().enumerate() {
        let placement = Isometry3::new(Vector3::new(18.0, 0.0, z), Vector3::zeros());
        design.add_occurrence(
            root,
            OccurrenceData::new(format!("Shelf:{}", i + 1), shelf_part).with_transform(placement),
        )?;
    }
    for i in 0..8 {
        let placement = Isometry3::rotation(Vector3::z() * FRAC_PI_2 * f64::from(i));
        design.add_occurrence(
            root,
            OccurrenceData::new(format!("Dowel:{}", i + 1), dowel_part).with_transform(placement),
        )?;
    }

    let options = ExportOptions {
        format,
        ..ExportOptions::default()
    };
    let text = export(&design, &store, &[Entity::Component(root)], &options, "Bookshelf")?;
    println!("{text}");
    eprintln!("suggested file name: {}", format.file_name("Bookshelf"));
    Ok(())
}
