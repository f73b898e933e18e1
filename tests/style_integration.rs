// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_toast::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_toast::ui::notifications::{Category, VisualFrame};
    use iced_toast::ui::theming::ThemeMode;

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        let _ = sizing::TOAST_WIDTH;
    }

    #[test]
    fn category_accents_are_distinct() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a} and {b} share an accent");
            }
        }
    }

    #[test]
    fn theming_switches_correctly() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }

    #[test]
    fn resting_frame_is_fully_opaque_at_full_size() {
        let frame = VisualFrame::at(1.0);
        assert!((frame.opacity - 1.0).abs() < f32::EPSILON);
        assert!((frame.scale - 1.0).abs() < 1e-5);
        assert!(frame.offset_y.abs() < 1e-3);
    }

    #[test]
    fn hidden_frame_is_transparent_above_the_slot() {
        let frame = VisualFrame::at(0.0);
        assert_eq!(frame.opacity, 0.0);
        assert!(frame.offset_y < 0.0);
        assert!(frame.scale < 1.0);
    }
}
