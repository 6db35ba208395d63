//! End-to-end properties of matchers built through the factory.

use std::sync::Arc;

use tessera_core::{ContinuousMapCoordinate, MapCoordinate, SpritePlacement, SpritePosition};
use tessera_nav::{BorderPolicy, GridType, NavigatorMetaData};
use tessera_select::{
    CellGroupDirection, CellGroupSelectorModel, CornerSelectorModel, Matcher, MatcherFactory,
    NeighbourSelectorModel, SelectorModel, TileMatchRequest,
};
use tessera_tags::GraphicTagMetaDataRegistry;
use tessera_test_utils::fixtures::{ascii_layer, grid_navigator, navigator, tag_registry};
use tessera_test_utils::MockDataSet;

fn tags() -> Arc<GraphicTagMetaDataRegistry<u16>> {
    Arc::new(tag_registry(&[
        ("A", &["a"]),
        ("B", &["b"]),
        ("grass", &["land"]),
        ("sand", &["land", "shore"]),
        ("river", &["water"]),
        ("road", &["road"]),
        ("rock", &[]),
    ]))
}

fn factory(map: &str) -> MatcherFactory<u16, u32> {
    let layer = ascii_layer(
        map,
        &[
            ('A', "A"),
            ('B', "B"),
            ('g', "grass"),
            ('s', "sand"),
            ('~', "river"),
            ('#', "road"),
            ('r', "rock"),
        ],
    );
    MatcherFactory::<u16, u32>::new(tags(), grid_navigator())
        .with_data_set("terrain", Arc::new(layer))
}

fn neighbour(self_class: &str, with_class: &str) -> NeighbourSelectorModel {
    NeighbourSelectorModel::new("", "terrain")
        .matching_self(self_class)
        .matching_with(with_class)
}

fn run(matcher: &Matcher<u16, u32>, tag: &str, x: i32, y: i32) -> (bool, Vec<SpritePlacement>) {
    let mut out = Vec::new();
    let request = TileMatchRequest::new(tag, MapCoordinate::new(x, y), 0);
    let hit = matcher.match_tile(&request, &mut out);
    (hit, out)
}

fn ids(out: &[SpritePlacement]) -> Vec<&str> {
    out.iter().map(|p| p.sprite.id()).collect()
}

// ── Scenario ─────────────────────────────────────────────────────

#[test]
fn cardinal_scenario_at_five_five() {
    let mut data = MockDataSet::new();
    data.set(5, 5, "A")
        .set(5, 4, "B")
        .set(5, 6, "B")
        .set(4, 5, "rock")
        .set(6, 5, "rock");
    let f = MatcherFactory::<u16, u32>::new(tags(), grid_navigator())
        .with_data_set("terrain", Arc::new(data));
    let m = f
        .build(&SelectorModel::Cardinal(
            NeighbourSelectorModel::new("tile.", "terrain")
                .matching_self("a")
                .matching_with("b"),
        ))
        .unwrap();

    let (hit, out) = run(&m, "A", 5, 5);
    assert!(hit);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].sprite.id(), "tile.A_n1e0s1w0");
    assert_eq!(out[0].position, SpritePosition::Whole);
    assert_eq!(out[0].coordinate, ContinuousMapCoordinate::new(5.0, 5.0));
}

// ── Determinism ──────────────────────────────────────────────────

#[test]
fn repeated_calls_are_identical() {
    let f = factory(
        "
        ~~.
        .~~
        ~.~
        ",
    );
    let model = SelectorModel::list(vec![
        SelectorModel::NeighbourOverlay(neighbour("water", "water")),
        SelectorModel::RoadParity(neighbour("water", "water")),
        SelectorModel::RiverOutlet(neighbour("water", "water")),
    ]);
    let m = f.build(&model).unwrap();
    let (_, first) = run(&m, "river", 1, 1);
    for _ in 0..10 {
        let (_, again) = run(&m, "river", 1, 1);
        assert_eq!(again, first);
    }
}

// ── Self-gating ──────────────────────────────────────────────────

#[test]
fn every_self_gated_kind_ignores_foreign_tiles() {
    let f = factory(
        "
        ggg
        ggg
        ggg
        ",
    );
    let n = neighbour("water", "land");
    let models = [
        SelectorModel::Cardinal(n.clone()),
        SelectorModel::Diagonal(n.clone()),
        SelectorModel::NeighbourOverlay(n.clone()),
        SelectorModel::RoadParity(n.clone()),
        SelectorModel::RoadCorner(n.clone()),
        SelectorModel::RiverOutlet(n),
    ];
    for model in &models {
        let m = f.build(model).unwrap();
        let (hit, out) = run(&m, "grass", 1, 1);
        assert!(!hit, "{} matched a foreign tile", model.matcher_type());
        assert!(out.is_empty());
    }
}

// ── Isolation ────────────────────────────────────────────────────

#[test]
fn lone_tiles_draw_only_the_isolated_sprite() {
    let f = factory(
        "
        rrr
        r#r
        rrr
        ",
    );
    for model in [
        SelectorModel::NeighbourOverlay(neighbour("road", "road")),
        SelectorModel::RoadParity(neighbour("road", "road")),
    ] {
        let m = f.build(&model).unwrap();
        let (hit, out) = run(&m, "road", 1, 1);
        assert!(hit);
        assert_eq!(ids(&out), ["road.isolated"]);
    }
}

// ── Incomplete patterns ──────────────────────────────────────────

#[test]
fn cell_group_needs_all_four_cells() {
    let layer = ascii_layer(
        "
        gs
        gg
        ",
        &[('g', "grass"), ('s', "sand")],
    );
    let iso = navigator(NavigatorMetaData::new(GridType::IsoDiamond));
    let f = MatcherFactory::<u16, u32>::new(tags(), iso).with_data_set("terrain", Arc::new(layer));
    let m = f
        .build(&SelectorModel::CellGroup(CellGroupSelectorModel {
            prefix: Some("blend".into()),
            context_data_set: Some("terrain".into()),
            matches: vec!["land".into()],
            default_class: None,
            direction: CellGroupDirection::Up,
        }))
        .unwrap();

    let (hit, out) = run(&m, "grass", 1, 1);
    assert!(hit);
    assert_eq!(ids(&out), ["blend_land_land_land_land"]);
    assert_eq!(out[0].position, SpritePosition::CellMap);

    // (0,0) sits on the northern edge: its quad is incomplete
    let (hit, out) = run(&m, "grass", 0, 0);
    assert!(!hit);
    assert!(out.is_empty());
}

// ── Outward placement ────────────────────────────────────────────

#[test]
fn river_outlets_are_drawn_on_the_sea() {
    let f = factory(
        "
        .A.
        B~B
        .A.
        ",
    );
    let m = f
        .build(&SelectorModel::RiverOutlet(neighbour("water", "b")))
        .unwrap();
    let (hit, out) = run(&m, "river", 1, 1);
    assert!(hit);
    assert_eq!(ids(&out), ["river_w", "river_e"]);
    let coords: Vec<_> = out.iter().map(|p| p.coordinate).collect();
    assert_eq!(
        coords,
        [
            ContinuousMapCoordinate::new(2.0, 1.0),
            ContinuousMapCoordinate::new(0.0, 1.0)
        ]
    );
}

// ── Composites ───────────────────────────────────────────────────

#[test]
fn list_of_basics_is_inclusive_or() {
    let f = factory("");
    let m = f
        .build(&SelectorModel::list(vec![
            SelectorModel::basic("", ".first"),
            SelectorModel::basic("", ".second"),
        ]))
        .unwrap();
    let (hit, out) = run(&m, "anything-at-all", 0, 0);
    assert!(hit);
    assert_eq!(ids(&out), ["anything-at-all.first", "anything-at-all.second"]);
}

#[test]
fn list_is_true_when_only_one_child_matches() {
    let f = factory("g");
    let m = f
        .build(&SelectorModel::list(vec![
            SelectorModel::Cardinal(neighbour("water", "water")),
            SelectorModel::basic("base.", ""),
        ]))
        .unwrap();
    let (hit, out) = run(&m, "grass", 0, 0);
    assert!(hit);
    assert_eq!(ids(&out), ["base.grass"]);
}

// ── Corner ───────────────────────────────────────────────────────

#[test]
fn corner_uses_class_names_per_quadrant() {
    let f = factory(
        "
        ~~~
        ggg
        ggg
        ",
    );
    let m = f
        .build(&SelectorModel::Corner(CornerSelectorModel {
            prefix: Some("coast".into()),
            context_data_set: Some("terrain".into()),
            matches: vec!["land".into(), "water".into()],
            default_class: None,
        }))
        .unwrap();
    let (hit, out) = run(&m, "grass", 1, 1);
    assert!(hit);
    assert_eq!(
        ids(&out),
        [
            "coast_n_land_water_water_water",
            "coast_e_land_water_land_land",
            "coast_s_land_land_land_land",
            "coast_w_land_land_land_water",
        ]
    );
}

// ── Thread safety ────────────────────────────────────────────────

#[test]
fn thread_safety_is_the_and_over_the_tree() {
    let safe: Arc<MockDataSet> = Arc::new(MockDataSet::new());
    let unsafe_data: Arc<MockDataSet> = Arc::new(MockDataSet::new().with_thread_safe(false));
    let f = MatcherFactory::<u16, u32>::new(tags(), grid_navigator())
        .with_data_set("safe", safe)
        .with_data_set("unsafe", unsafe_data);

    let on = |id: &str| {
        SelectorModel::Cardinal(NeighbourSelectorModel::new("", id).matching_self("a"))
    };
    let all_safe = f
        .build(&SelectorModel::list(vec![SelectorModel::basic("", ""), on("safe")]))
        .unwrap();
    assert!(all_safe.is_thread_safe());

    let mixed = f
        .build(&SelectorModel::list(vec![on("safe"), SelectorModel::list(vec![on("unsafe")])]))
        .unwrap();
    assert!(!mixed.is_thread_safe());
}

#[test]
fn matchers_probe_a_bounded_neighbourhood() {
    let data = Arc::new(MockDataSet::new());
    let f = MatcherFactory::<u16, u32>::new(tags(), grid_navigator())
        .with_data_set("terrain", data.clone());
    let m = f
        .build(&SelectorModel::NeighbourOverlay(neighbour("a", "b")))
        .unwrap();
    run(&m, "A", 0, 0);
    assert_eq!(data.query_count(), 8);
}

// ── Navigation ───────────────────────────────────────────────────

#[test]
fn wrapped_maps_connect_across_the_seam() {
    let layer = ascii_layer("~.~", &[('~', "river")]);
    let meta = NavigatorMetaData::new(GridType::Grid)
        .with_horizontal(BorderPolicy::wrap(0, 3).unwrap());
    let f = MatcherFactory::<u16, u32>::new(tags(), navigator(meta))
        .with_data_set("terrain", Arc::new(layer));
    let m = f
        .build(&SelectorModel::Cardinal(neighbour("water", "water")))
        .unwrap();
    let (_, out) = run(&m, "river", 0, 0);
    assert_eq!(ids(&out), ["river_n0e0s0w1"]);
}

#[test]
fn limited_maps_see_the_edge_cell_itself() {
    // clamping folds the western probe back onto the tile
    let layer = ascii_layer("~.", &[('~', "river")]);
    let meta = NavigatorMetaData::new(GridType::Grid)
        .with_horizontal(BorderPolicy::limit(0, 2).unwrap());
    let f = MatcherFactory::<u16, u32>::new(tags(), navigator(meta))
        .with_data_set("terrain", Arc::new(layer));
    let m = f
        .build(&SelectorModel::Cardinal(neighbour("water", "water")))
        .unwrap();
    let (_, out) = run(&m, "river", 0, 0);
    assert_eq!(ids(&out), ["river_n0e0s0w1"]);
}
