//! Property tests for the annotation engine

use proptest::prelude::*;

use source_annotate::fold::{match_braces, FoldRegions, FoldState};
use source_annotate::syntax::alterion_table;

/// Source-like lines: keywords, operators, quotes, comments and stray bytes
fn line_strategy() -> impl Strategy<Value = String> {
    let fragments = prop::sample::select(vec![
        "fn", "let", "owned", "int", "=>", "//", "/*", "*/", "\"", "'", "`", ".", "(", "{",
        "}", " ",
    ])
    .prop_map(str::to_string);
    prop::collection::vec(
        prop_oneof![
            fragments,
            "[a-z_]{1,6}",
            "[0-9]{1,3}(\\.[0-9]{1,2})?",
            "[<>&!=+*/%;:,@#$\\\\é]",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["{", "}", "} else {", "x", ""]),
        0..30,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn final_tokens_are_ordered_and_disjoint(line in line_strategy()) {
        let table = alterion_table().unwrap();
        let tokens = table.highlight_line(&line);
        for token in &tokens {
            prop_assert!(token.start < token.end);
            prop_assert_eq!(token.text, &line[token.start..token.end]);
        }
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn gaps_and_tokens_reproduce_the_line(line in line_strategy()) {
        let table = alterion_table().unwrap();
        let tokens = table.highlight_line(&line);
        let mut rebuilt = String::new();
        let mut last_end = 0;
        for token in &tokens {
            rebuilt.push_str(&line[last_end..token.start]);
            rebuilt.push_str(token.text);
            last_end = token.end;
        }
        rebuilt.push_str(&line[last_end..]);
        prop_assert_eq!(rebuilt, line);
    }

    #[test]
    fn brace_pairs_are_bounded(source in source_strategy()) {
        let pairs = match_braces(&source);
        let openers = source.split('\n').filter(|l| l.contains('{')).count();
        prop_assert!(pairs.len() <= openers);
        for pair in &pairs {
            prop_assert!(pair.start < pair.end);
        }
    }

    #[test]
    fn visible_lines_agree_with_is_hidden(
        source in source_strategy(),
        toggles in prop::collection::vec(0usize..30, 0..8),
    ) {
        let regions = FoldRegions::new(&source);
        let mut state = FoldState::new();
        for line in toggles {
            if regions.is_anchor(line) {
                state.toggle(line);
            }
        }
        let line_count = source.split('\n').count();
        let expected: Vec<_> = (0..line_count).filter(|&i| !regions.is_hidden(i, &state)).collect();
        let visible: Vec<_> = regions.visible_lines(&state).collect();
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn collapse_then_expand_restores_visibility(
        source in source_strategy(),
        outer_pick in any::<prop::sample::Index>(),
        inner_pick in any::<prop::sample::Index>(),
    ) {
        let regions = FoldRegions::new(&source);
        let pairs: Vec<_> = regions.pairs().collect();
        if pairs.is_empty() {
            return Ok(());
        }
        let outer = pairs[outer_pick.index(pairs.len())];

        let mut state = FoldState::new();
        let nested: Vec<_> = pairs
            .iter()
            .filter(|p| outer.start < p.start && p.end <= outer.end)
            .collect();
        if !nested.is_empty() {
            state.toggle(nested[inner_pick.index(nested.len())].start);
        }

        let line_count = source.split('\n').count();
        let before: Vec<_> = (0..line_count).map(|i| regions.is_hidden(i, &state)).collect();

        state.toggle(outer.start);
        for i in 0..line_count {
            let covered = outer.start < i && i <= outer.end;
            prop_assert_eq!(regions.is_hidden(i, &state), covered || before[i]);
        }
        let visible: Vec<_> = regions.visible_lines(&state).collect();
        let expected: Vec<_> = (0..line_count).filter(|&i| !regions.is_hidden(i, &state)).collect();
        prop_assert_eq!(visible, expected);

        state.toggle(outer.start);
        let after: Vec<_> = (0..line_count).map(|i| regions.is_hidden(i, &state)).collect();
        prop_assert_eq!(before, after);
    }
}
