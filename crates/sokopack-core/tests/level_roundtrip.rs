// crates/sokopack-core/tests/level_roundtrip.rs

use sokopack_core::decode::decode;
use sokopack_core::grid::align_row;
use sokopack_core::render::parse_data_block;
use sokopack_core::{encode, DataBlock, LevelGrid};

fn lcg_next(x: &mut u64) -> u64 {
    // deterministic, not crypto
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    *x
}

#[test]
fn wall_only_grids_roundtrip() {
    let mut seed: u64 = 0x1234_5678_9abc_def0;

    for width in 1..16 {
        for height in 1..16 {
            let rows: Vec<String> = (0..height)
                .map(|_| {
                    (0..width)
                        .map(|_| if lcg_next(&mut seed) >> 63 == 1 { '#' } else { ' ' })
                        .collect()
                })
                .collect();
            let lvl = encode(&LevelGrid::new(width, height, rows.clone())).unwrap();

            let d = decode(lvl.as_bytes(), width, 0).expect("decode ok");
            assert_eq!(d.height, height);
            assert_eq!(d.to_rows(), rows, "width={} height={}", width, height);
        }
    }
}

#[test]
fn full_level_roundtrips_through_data_text() {
    let rows = ["  #####", "###   #", "#.@$  #", "### $.#", "#.##$ #", "# # . ##", "#$ *$$.#", "#   .  #", "########"];
    let g = LevelGrid::from_rows(rows);
    let lvl = encode(&g).unwrap();

    let text = lvl.render(&DataBlock::default());
    assert!(text.starts_with("1000 DATA "));
    assert!(text.ends_with("\n1001 DATA -1"));

    let bytes = parse_data_block(&text).unwrap();
    assert_eq!(bytes, lvl.as_bytes());

    let d = decode(&bytes, g.width, lvl.goal_count()).unwrap();
    let expected: Vec<String> = rows.iter().map(|r| align_row(r, g.width)).collect();
    assert_eq!(d.to_rows(), expected);
    assert_eq!(d.to_trimmed_rows()[0], "  #####");
}
