//! Plain-text rendering for terminals.

use std::collections::HashSet;

use crate::catalog::Element;
use crate::layout::PeriodicGrid;

const CELL_WIDTH: usize = 3;
const DIMMED: &str = "·";

/// Draws the grid one line per row. With a highlight set, elements outside
/// it are shown as a dot so the matches stand out in place.
pub fn table(grid: &PeriodicGrid, highlight: Option<&HashSet<u8>>) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        let mut line = String::new();
        for cell in row {
            let label = match cell {
                None => "",
                Some(e) if highlight.map_or(true, |h| h.contains(&e.atomic_number)) => e.symbol.as_str(),
                Some(_) => DIMMED,
            };
            line.push_str(&format!("{label:>CELL_WIDTH$}"));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn element_card(e: &Element) -> String {
    let mut lines = vec![
        format!("{} ({}) {}", e.symbol, e.atomic_number, e.name),
        format!(
            "  {}, {}-block, period {}, group {}",
            e.category, e.block, e.period, e.group
        ),
        format!("  mass {} u, {} at room temperature", e.atomic_mass, e.state),
        format!("  configuration {}", e.electron_configuration),
    ];

    if let (Some(mp), Some(bp)) = (e.melting_point, e.boiling_point) {
        lines.push(format!("  melts {mp} K, boils {bp} K"));
    }
    if let Some(en) = e.electronegativity {
        lines.push(format!("  electronegativity {en}"));
    }
    if let Some(d) = &e.discovery {
        lines.push(match d.year {
            Some(year) => format!("  discovered by {} ({year})", d.by),
            None => format!("  discovered by {}", d.by),
        });
    }
    if !e.uses.is_empty() {
        lines.push(format!("  uses: {}", e.uses.join("; ")));
    }
    if !e.levels.is_empty() {
        let levels: Vec<&str> = e.levels.iter().map(|l| l.as_str()).collect();
        lines.push(format!("  syllabus: {}", levels.join(", ")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_table_shape() {
        let grid = PeriodicGrid::build(&Catalog::builtin().elements);
        let text = table(&grid, None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].trim_start().starts_with("H "));
        assert!(lines[0].ends_with("He"));
        assert!(lines[7].is_empty());
        assert!(lines[8].trim_start().starts_with("La"));
        assert!(lines[9].ends_with("Lr"));
    }

    #[test]
    fn test_table_highlight_dims_the_rest() {
        let grid = PeriodicGrid::build(&Catalog::builtin().elements);
        let only_helium: HashSet<u8> = [2].into_iter().collect();
        let text = table(&grid, Some(&only_helium));
        let first = text.lines().next().unwrap();
        assert!(first.trim_start().starts_with(DIMMED));
        assert!(first.ends_with("He"));
        assert!(!text.contains("Fe"));
    }

    #[test]
    fn test_element_card() {
        let iron = Catalog::builtin().element_by_symbol("fe").unwrap();
        let card = element_card(iron);
        assert!(card.starts_with("Fe (26) Iron\n"));
        assert!(card.contains("transition metal, d-block, period 4, group 8"));
        assert!(card.contains("[Ar] 3d6 4s2"));
        assert!(card.ends_with('\n'));
    }

    #[test]
    fn test_element_card_skips_missing_details() {
        let mut bare = Catalog::builtin().element(26).unwrap().clone();
        bare.melting_point = None;
        bare.electronegativity = None;
        bare.discovery = None;
        bare.uses.clear();
        bare.levels.clear();
        let card = element_card(&bare);
        assert_eq!(card.lines().count(), 4);
        assert_eq!(card.lines().last(), Some("  configuration [Ar] 3d6 4s2"));

        bare.discovery = Some(crate::catalog::Discovery { by: "Unknown".to_string(), year: None });
        assert!(element_card(&bare).ends_with("  discovered by Unknown\n"));
    }
}
