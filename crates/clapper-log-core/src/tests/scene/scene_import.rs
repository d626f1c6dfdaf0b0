use crate::{ImportedScene, parse_scene_list};

fn entry(code: &str, title: &str) -> ImportedScene {
    ImportedScene {
        code: code.to_string(),
        title: title.to_string(),
    }
}

/// WHAT: Single-scene lines parse with or without prefix and separator
/// WHY: Schedules are typed by hand in several styles
#[test]
fn given_single_scene_lines_when_parsing_then_codes_normalised() {
    // Given: Lines in different shapes
    let raw = "03 - Kitchen argument\ns04ー Rooftop\nS05 Garden\n\n   07-Car   \n";

    // When: Parsing
    let scenes = parse_scene_list(raw);

    // Then: Each line yields one normalised entry
    assert_eq!(
        scenes,
        vec![
            entry("s03", "Kitchen argument"),
            entry("s04", "Rooftop"),
            entry("s05", "Garden"),
            entry("s07", "Car"),
        ]
    );
}

/// WHAT: Range lines expand into one entry per number
/// WHY: Montage blocks share a title across consecutive scenes
#[test]
fn given_range_line_when_parsing_then_expanded_inclusive() {
    // Given: A range line
    let raw = "s05~s07 - Montage";

    // When: Parsing
    let scenes = parse_scene_list(raw);

    // Then: Three entries sharing the title
    assert_eq!(
        scenes,
        vec![
            entry("s05", "Montage"),
            entry("s06", "Montage"),
            entry("s07", "Montage"),
        ]
    );
}

/// WHAT: Lines without a two-digit code or title are skipped
/// WHY: Pasted documents contain headings and notes
#[test]
fn given_noise_lines_when_parsing_then_ignored() {
    // Given: Non-schedule lines
    let raw = "Shooting schedule\n5 - one digit\n12\nscene 3\r\n08 - Kept";

    // When: Parsing
    let scenes = parse_scene_list(raw);

    // Then: Only the valid line survives
    assert_eq!(scenes, vec![entry("s08", "Kept")]);
}

/// WHAT: Imported entries map to "code title" pool ids
/// WHY: The pool shows the title next to the code
#[test]
fn given_imported_scene_when_building_id_then_code_space_title() {
    // Given/When/Then
    assert_eq!(entry("s09", "Bar").scene_id().as_str(), "s09 Bar");
}

/// WHAT: A code followed only by a separator keeps the separator as its title
/// WHY: A half-typed line still reserves its scene number instead of vanishing
#[test]
fn given_code_with_bare_separator_when_parsing_then_separator_is_title() {
    // Given: Bare separators after a code, and a bare code
    let raw = "03 -\ns04ー\n05";

    // When: Parsing
    let scenes = parse_scene_list(raw);

    // Then: The bare code has no title and is skipped
    assert_eq!(scenes, vec![entry("s03", "-"), entry("s04", "ー")]);
}
