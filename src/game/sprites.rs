//! Pixel maps for the play field. `.` is transparent, every other character
//! is looked up in [`palette`].

pub const DUCK: [&str; 11] = [
    "................",
    ".....YYYYYY.....",
    "...YYYYYYYYYY...",
    "..YYYYYYYYYYYY..",
    ".YYYYYYOYYYYYYY.",
    ".YYYYOOOYYYYYYY.",
    "..YYYYYYYYYYYY..",
    "....YYYBYYY.....",
    "......YBY.......",
    ".......Y........",
    "................",
];

pub const PIPE: [&str; 6] = [
    "GGGGGGGGGGGGGGGG",
    "GGGGGGGGGGGGGGGG",
    "GGGGGGGGGGGGGGGG",
    "GGGGGGGGGGGGGGGG",
    "GGGGGGGGGGGGGGGG",
    "GGGGGGGGGGGGGGGG",
];

pub const BUSH: [&str; 5] = [
    "..gggggggggg..",
    ".gggggggggggg.",
    "gggggggggggggg",
    ".gggggggggggg.",
    "..gggggggggg..",
];

pub const CLOUD: [&str; 5] = [
    "....wwwww....",
    "..wwwwwwwww..",
    ".wwwwwwwwwww.",
    "..wwwwwwwww..",
    "....wwwww....",
];

pub const BLOCK: [&str; 5] = [
    "RRRRRRRR",
    "R..R..RR",
    "RRRRRRRR",
    "R..RR..R",
    "RRRRRRRR",
];

pub const SUN: [&str; 5] = [
    "..OOO..",
    ".OOOOO.",
    "OOOOOOO",
    ".OOOOO.",
    "..OOO..",
];

pub const SKY: [(u8, u8, u8); 4] = [(155, 231, 255), (143, 216, 255), (132, 202, 255), (121, 188, 255)];
pub const WATER: (u8, u8, u8) = (100, 181, 246);
pub const GRASS: (u8, u8, u8) = (77, 182, 172);

pub fn palette(ch: char) -> Option<(u8, u8, u8)> {
    match ch {
        'Y' => Some((244, 208, 63)),  // duck yellow
        'O' => Some((243, 156, 18)),  // beak
        'B' => Some((109, 76, 65)),   // wing
        'G' => Some((56, 142, 60)),   // pipe
        'g' => Some((102, 187, 106)), // bush
        'w' => Some((255, 255, 255)), // cloud
        'R' => Some((181, 101, 29)),  // brick
        _ => None,
    }
}

pub fn size(pixmap: &[&str]) -> (u16, u16) {
    let w = pixmap.iter().map(|row| row.chars().count()).max().unwrap_or(0);
    (w as u16, pixmap.len() as u16)
}

pub fn duck_size() -> (u16, u16) {
    size(&DUCK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duck_is_sixteen_by_eleven() {
        assert_eq!(duck_size(), (16, 11));
    }

    #[test]
    fn every_sprite_char_has_a_color() {
        let sprites: [&[&str]; 6] = [&DUCK, &PIPE, &BUSH, &CLOUD, &BLOCK, &SUN];
        for sprite in sprites {
            for ch in sprite.iter().flat_map(|row| row.chars()) {
                assert!(ch == '.' || palette(ch).is_some(), "no color for {ch:?}");
            }
        }
    }
}
