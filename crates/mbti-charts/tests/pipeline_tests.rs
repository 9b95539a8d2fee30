//! Full-path checks: CSV text in, chart specs out.

use std::io::Cursor;

use pretty_assertions::assert_eq;

use mbti_charts::{dominant_type_map, top_n_chart, Coloring};
use mbti_io::{load_table, LoadOptions};
use mbti_model::{Color, MbtiType};

const CSV: &str = "\
Country,INTJ-T,INTJ-A,INTP,ENTJ,ENTP,INFJ,INFP,ENFJ,ENFP,ISTJ,ISFJ,ESTJ,ESFJ,ISTP,ISFP,ESTP,ESFP
South Korea,3,2,5,5,5,5,30,5,5,5,5,5,5,5,5,2.5,2.5
Freedonia,10,5,5,5,5,5,10,5,5,5,5,5,5,10,5,5,5
Sylvania,1,1,6,6,6,6,16,6,6,6,6,6,6,9,6,6,6
";

#[test]
fn csv_to_top_n_chart_with_pinned_highlight() {
    let table = load_table(Cursor::new(CSV.as_bytes()), &LoadOptions::default()).unwrap();
    assert_eq!(table.len(), 3);

    // INTJ after suffix merge: South Korea 5, Freedonia 15, Sylvania 2.
    let chart = top_n_chart(&table, MbtiType::INTJ, 2, Some("Sylvania")).unwrap();
    let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Freedonia", "South Korea", "Sylvania"]);
    assert_eq!(chart.bars[2].color, Some(Color::red()));
}

#[test]
fn csv_to_dominant_map_keeps_every_legend_category() {
    let table = load_table(Cursor::new(CSV.as_bytes()), &LoadOptions::default()).unwrap();
    let map = dominant_type_map(&table);

    assert_eq!(map.regions.len(), 3);
    let korea = map
        .regions
        .iter()
        .find(|r| r.country == "South Korea")
        .unwrap();
    assert_eq!(korea.category, Some(MbtiType::INFP));

    let Coloring::Categorical { legend } = &map.coloring else {
        panic!("expected categorical coloring");
    };
    assert_eq!(legend.len(), 16);
    // INFP dominates South Korea and Sylvania; Freedonia peaks at INTJ.
    assert_eq!(legend[0].mbti, MbtiType::INFP);
    assert_eq!(legend[0].count, 2);
    assert_eq!(legend[1].mbti, MbtiType::INTJ);
    assert_eq!(legend[1].count, 1);
}
