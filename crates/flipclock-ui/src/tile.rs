//! Retained four-face tile.

use flipclock_core::digit::{DigitPosition, FaceSlot, FlipClass, FlipFrame, FlipTile};

/// Glyph shown by a freshly built face.
pub const BLANK_GLYPH: char = '0';

/// Projected height above which an animated face hides the static one
/// beneath it.
const COVER_THRESHOLD: f32 = 0.5;

/// One face of a tile: a glyph plus its active animation classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    glyph: char,
    classes: Vec<FlipClass>,
    /// Layout generation at which the most recent class was added.
    armed_at: Option<u64>,
}

impl Face {
    fn new() -> Self {
        Self { glyph: BLANK_GLYPH, classes: Vec::new(), armed_at: None }
    }

    #[inline]
    pub fn glyph(&self) -> char {
        self.glyph
    }

    #[inline]
    pub fn has_class(&self, class: FlipClass) -> bool {
        self.classes.contains(&class)
    }

    #[inline]
    pub fn classes(&self) -> &[FlipClass] {
        &self.classes
    }

    #[inline]
    pub fn armed_at(&self) -> Option<u64> {
        self.armed_at
    }
}

/// Visuals for one digit position.
///
/// Faces are indexed by [`FaceSlot`]. A face can be dropped to model an
/// element that went missing after mount; the core then skips updates for
/// this tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    position: DigitPosition,
    faces: [Option<Face>; 4],
    layout_generation: u64,
}

impl Tile {
    pub fn new(position: DigitPosition) -> Self {
        Self {
            position,
            faces: std::array::from_fn(|_| Some(Face::new())),
            layout_generation: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> DigitPosition {
        self.position
    }

    #[inline]
    pub fn face(&self, slot: FaceSlot) -> Option<&Face> {
        self.faces[slot as usize].as_ref()
    }

    /// Number of forced layouts so far.
    #[inline]
    pub fn layout_generation(&self) -> u64 {
        self.layout_generation
    }

    /// Destroys one face. Returns `false` if it was already gone.
    pub fn drop_face(&mut self, slot: FaceSlot) -> bool {
        self.faces[slot as usize].take().is_some()
    }

    /// Glyph of `slot`, or a blank if the face is gone.
    pub fn glyph(&self, slot: FaceSlot) -> char {
        self.face(slot).map(Face::glyph).unwrap_or(' ')
    }

    /// Glyphs an observer sees on the upper and lower half at `frame`.
    pub fn visible_glyphs(&self, frame: FlipFrame) -> (char, char) {
        let upper = if frame.upper_scale() > COVER_THRESHOLD {
            FaceSlot::UpperAnimated
        } else {
            FaceSlot::UpperStatic
        };
        let lower = if frame.lower_scale() > COVER_THRESHOLD {
            FaceSlot::LowerAnimated
        } else {
            FaceSlot::LowerStatic
        };
        (self.glyph(upper), self.glyph(lower))
    }

    fn face_mut(&mut self, slot: FaceSlot) -> Option<&mut Face> {
        self.faces[slot as usize].as_mut()
    }
}

impl FlipTile for Tile {
    fn has_face(&self, slot: FaceSlot) -> bool {
        self.face(slot).is_some()
    }

    fn set_text(&mut self, slot: FaceSlot, glyph: char) {
        if let Some(face) = self.face_mut(slot) {
            face.glyph = glyph;
        }
    }

    fn add_class(&mut self, slot: FaceSlot, class: FlipClass) {
        let generation = self.layout_generation;
        if let Some(face) = self.face_mut(slot) {
            if !face.classes.contains(&class) {
                face.classes.push(class);
                face.armed_at = Some(generation);
            }
        }
    }

    fn remove_class(&mut self, slot: FaceSlot, class: FlipClass) {
        if let Some(face) = self.face_mut(slot) {
            face.classes.retain(|c| *c != class);
        }
    }

    fn force_layout(&mut self) {
        self.layout_generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arm(tile: &mut Tile, previous: char, next: char) {
        tile.set_text(FaceSlot::UpperStatic, next);
        tile.set_text(FaceSlot::LowerStatic, previous);
        tile.set_text(FaceSlot::UpperAnimated, previous);
        tile.set_text(FaceSlot::LowerAnimated, next);
        tile.remove_class(FaceSlot::UpperAnimated, FlipClass::FlipDownTop);
        tile.force_layout();
        tile.add_class(FaceSlot::UpperAnimated, FlipClass::FlipDownTop);
    }

    #[test]
    fn new_tile_shows_blank_glyph_everywhere() {
        let tile = Tile::new(DigitPosition::H1);
        for slot in FaceSlot::ALL {
            assert_eq!(tile.glyph(slot), BLANK_GLYPH);
            assert!(tile.has_face(slot));
        }
    }

    #[test]
    fn visible_glyphs_follow_the_fold() {
        let mut tile = Tile::new(DigitPosition::M2);
        arm(&mut tile, '4', '5');

        let start = FlipFrame { upper_angle: 0.0, lower_angle: 90.0 };
        assert_eq!(tile.visible_glyphs(start), ('4', '4'));

        let midway = FlipFrame { upper_angle: -90.0, lower_angle: 90.0 };
        assert_eq!(tile.visible_glyphs(midway), ('5', '4'));

        assert_eq!(tile.visible_glyphs(FlipFrame::SETTLED), ('5', '5'));
    }

    #[test]
    fn re_adding_a_class_after_layout_rearms() {
        let mut tile = Tile::new(DigitPosition::M2);
        arm(&mut tile, '1', '2');
        assert_eq!(tile.face(FaceSlot::UpperAnimated).unwrap().armed_at(), Some(1));
        arm(&mut tile, '2', '3');
        let face = tile.face(FaceSlot::UpperAnimated).unwrap();
        assert_eq!(face.armed_at(), Some(2));
        assert_eq!(face.classes(), &[FlipClass::FlipDownTop]);
    }

    #[test]
    fn dropped_face_ignores_writes() {
        let mut tile = Tile::new(DigitPosition::S1);
        assert!(tile.drop_face(FaceSlot::LowerStatic));
        assert!(!tile.drop_face(FaceSlot::LowerStatic));
        tile.set_text(FaceSlot::LowerStatic, '9');
        assert!(!tile.has_face(FaceSlot::LowerStatic));
        assert_eq!(tile.glyph(FaceSlot::LowerStatic), ' ');
    }
}
