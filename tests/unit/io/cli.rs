//! Tests for CLI argument handling

#[cfg(test)]
mod tests {
    use crate::io::cli::{Cli, PaintMode};
    use crate::io::configuration::{DEFAULT_ORIENTED_STROKES, DEFAULT_STROKES};
    use clap::Parser;

    #[test]
    fn test_defaults_parse() {
        let Ok(cli) = Cli::try_parse_from(["impasto", "scene.png"]) else {
            unreachable!("a bare target must parse");
        };
        assert_eq!(cli.mode, PaintMode::Painterly);
        assert_eq!(cli.stroke_count(), DEFAULT_STROKES);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    #[test]
    fn test_oriented_modes_use_their_own_stroke_default() {
        let Ok(cli) = Cli::try_parse_from(["impasto", "-m", "oriented", "scene.png"]) else {
            unreachable!("oriented mode must parse");
        };
        assert_eq!(cli.stroke_count(), DEFAULT_ORIENTED_STROKES);
    }

    #[test]
    fn test_explicit_strokes_override_mode_default() {
        let Ok(cli) = Cli::try_parse_from(["impasto", "-n", "123", "scene.png"]) else {
            unreachable!("explicit stroke count must parse");
        };
        assert_eq!(cli.stroke_count(), 123);
    }

    #[test]
    fn test_tonal_modes_parse_by_kebab_name() {
        let Ok(cli) = Cli::try_parse_from(["impasto", "-m", "light-to-dark", "scene.png"]) else {
            unreachable!("tonal mode must parse");
        };
        assert_eq!(cli.mode, PaintMode::LightToDark);
    }

    #[test]
    fn test_missing_target_is_an_error() {
        assert!(Cli::try_parse_from(["impasto"]).is_err());
    }
}
