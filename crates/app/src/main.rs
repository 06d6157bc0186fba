//! Headless demo: synthesizes rail geometry for a small network over noise
//! terrain and prints a summary of the emitted primitives.

use railway::config::TERRAIN_HEIGHT_SCALE;
use railway::elevation::NoiseElevation;
use railway::ground::TagStructureClassifier;
use railway::network::{classify_network, RailNetwork};
use railway::render::render_network;
use railway::sink::{CollectingSink, Material};
use railway::tags::TagStore;
use railway::Vec2;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let elevation = NoiseElevation::new(seed, TERRAIN_HEIGHT_SCALE);

    let mut network = RailNetwork::new();
    let rail = TagStore::from_pairs(&[("railway", "rail")]);
    // A mainline splitting at a junction, with a tram branch as third arm.
    network.add_way(Vec2::new(-60.0, 0.0), Vec2::ZERO, rail.clone());
    network.add_way(Vec2::ZERO, Vec2::new(60.0, 8.0), rail.clone());
    network.add_way(
        Vec2::ZERO,
        Vec2::new(55.0, -25.0),
        TagStore::from_pairs(&[("railway", "tram")]),
    );
    // A bridge span, and a road the classifier must ignore.
    network.add_way(
        Vec2::new(-40.0, 30.0),
        Vec2::new(40.0, 38.0),
        TagStore::from_pairs(&[("railway", "rail"), ("bridge", "yes")]),
    );
    network.add_way(
        Vec2::new(-40.0, -40.0),
        Vec2::new(40.0, -40.0),
        TagStore::from_pairs(&[("highway", "primary")]),
    );

    classify_network(&mut network, &TagStructureClassifier);

    let mut sink = CollectingSink::new();
    render_network(&network, &elevation, &mut sink);

    let summary = serde_json::json!({
        "seed": seed,
        "ways": network.segments.len(),
        "rail_segments": network
            .segments
            .iter()
            .filter(|segment| segment.rail().is_some())
            .count(),
        "ballast_strips": sink.strip_count(Material::Ballast),
        "rail_strips": sink.strip_count(Material::Rail),
        "junction_polygons": sink.polygon_count(Material::Ballast),
        "sleeper_boxes": sink.box_count(Material::Sleeper),
        "primitives": sink.primitives.len(),
    });
    println!("{summary:#}");
}
