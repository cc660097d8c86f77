//! Bundled glyph bitmaps for printable ASCII (`' '..='~'`, 95 glyphs).
//!
//! One byte per row, top row first; the low `width` bits hold the row with the leftmost
//! pixel in the highest of those bits.

/// 5×7 glyphs used by the `tb-8`, `5x8`, `6x10` and `6x13` fonts.
pub(crate) static GLYPHS_5X7: [u8; 95 * 7] = [
    // space
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000,
    // !
    0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100,
    // "
    0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000,
    // #
    0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010,
    // $
    0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100,
    // %
    0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011,
    // &
    0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101,
    // '
    0b01100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000,
    // (
    0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010,
    // )
    0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000,
    // *
    0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000,
    // +
    0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000,
    // ,
    0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000,
    // -
    0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000,
    // .
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100,
    // /
    0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000,
    // 0
    0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110,
    // 1
    0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110,
    // 2
    0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111,
    // 3
    0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110,
    // 4
    0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010,
    // 5
    0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110,
    // 6
    0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110,
    // 7
    0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000,
    // 8
    0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110,
    // 9
    0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100,
    // :
    0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000,
    // ;
    0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b00100, 0b01000,
    // <
    0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010,
    // =
    0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000,
    // >
    0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000,
    // ?
    0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100,
    // @
    0b01110, 0b10001, 0b00001, 0b01101, 0b10101, 0b10101, 0b01110,
    // A
    0b01110, 0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001,
    // B
    0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110,
    // C
    0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110,
    // D
    0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100,
    // E
    0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111,
    // F
    0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000,
    // G
    0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111,
    // H
    0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001,
    // I
    0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110,
    // J
    0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100,
    // K
    0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001,
    // L
    0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111,
    // M
    0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001,
    // N
    0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001,
    // O
    0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110,
    // P
    0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000,
    // Q
    0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101,
    // R
    0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001,
    // S
    0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110,
    // T
    0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100,
    // U
    0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110,
    // V
    0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100,
    // W
    0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010,
    // X
    0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001,
    // Y
    0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100,
    // Z
    0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111,
    // [
    0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110,
    // \
    0b00000, 0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000,
    // ]
    0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110,
    // ^
    0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000,
    // _
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111,
    // `
    0b01000, 0b00100, 0b00010, 0b00000, 0b00000, 0b00000, 0b00000,
    // a
    0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111,
    // b
    0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110,
    // c
    0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110,
    // d
    0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111,
    // e
    0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110,
    // f
    0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000,
    // g
    0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110,
    // h
    0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001,
    // i
    0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110,
    // j
    0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100,
    // k
    0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010,
    // l
    0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110,
    // m
    0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001,
    // n
    0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001,
    // o
    0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110,
    // p
    0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000,
    // q
    0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001,
    // r
    0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000,
    // s
    0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110,
    // t
    0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110,
    // u
    0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101,
    // v
    0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100,
    // w
    0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010,
    // x
    0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001,
    // y
    0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110,
    // z
    0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111,
    // {
    0b00010, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00010,
    // |
    0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100,
    // }
    0b01000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01000,
    // ~
    0b00000, 0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000,
];

/// 3×5 glyphs used by `tom-thumb` and `CG-pixel-3x5-mono`.
pub(crate) static GLYPHS_3X5: [u8; 95 * 5] = [
    // space
    0b000, 0b000, 0b000, 0b000, 0b000,
    // !
    0b010, 0b010, 0b010, 0b000, 0b010,
    // "
    0b101, 0b101, 0b000, 0b000, 0b000,
    // #
    0b101, 0b111, 0b101, 0b111, 0b101,
    // $
    0b011, 0b110, 0b011, 0b110, 0b010,
    // %
    0b100, 0b001, 0b010, 0b100, 0b001,
    // &
    0b110, 0b110, 0b111, 0b101, 0b011,
    // '
    0b010, 0b010, 0b000, 0b000, 0b000,
    // (
    0b001, 0b010, 0b010, 0b010, 0b001,
    // )
    0b100, 0b010, 0b010, 0b010, 0b100,
    // *
    0b101, 0b010, 0b101, 0b000, 0b000,
    // +
    0b000, 0b010, 0b111, 0b010, 0b000,
    // ,
    0b000, 0b000, 0b000, 0b010, 0b100,
    // -
    0b000, 0b000, 0b111, 0b000, 0b000,
    // .
    0b000, 0b000, 0b000, 0b000, 0b010,
    // /
    0b001, 0b001, 0b010, 0b100, 0b100,
    // 0
    0b011, 0b101, 0b101, 0b101, 0b110,
    // 1
    0b010, 0b110, 0b010, 0b010, 0b010,
    // 2
    0b110, 0b001, 0b010, 0b100, 0b111,
    // 3
    0b110, 0b001, 0b010, 0b001, 0b110,
    // 4
    0b101, 0b101, 0b111, 0b001, 0b001,
    // 5
    0b111, 0b100, 0b110, 0b001, 0b110,
    // 6
    0b011, 0b100, 0b111, 0b101, 0b111,
    // 7
    0b111, 0b001, 0b010, 0b100, 0b100,
    // 8
    0b111, 0b101, 0b111, 0b101, 0b111,
    // 9
    0b111, 0b101, 0b111, 0b001, 0b110,
    // :
    0b000, 0b010, 0b000, 0b010, 0b000,
    // ;
    0b000, 0b010, 0b000, 0b010, 0b100,
    // <
    0b001, 0b010, 0b100, 0b010, 0b001,
    // =
    0b000, 0b111, 0b000, 0b111, 0b000,
    // >
    0b100, 0b010, 0b001, 0b010, 0b100,
    // ?
    0b111, 0b001, 0b010, 0b000, 0b010,
    // @
    0b010, 0b101, 0b111, 0b100, 0b011,
    // A
    0b010, 0b101, 0b111, 0b101, 0b101,
    // B
    0b110, 0b101, 0b110, 0b101, 0b110,
    // C
    0b011, 0b100, 0b100, 0b100, 0b011,
    // D
    0b110, 0b101, 0b101, 0b101, 0b110,
    // E
    0b111, 0b100, 0b111, 0b100, 0b111,
    // F
    0b111, 0b100, 0b111, 0b100, 0b100,
    // G
    0b011, 0b100, 0b111, 0b101, 0b011,
    // H
    0b101, 0b101, 0b111, 0b101, 0b101,
    // I
    0b111, 0b010, 0b010, 0b010, 0b111,
    // J
    0b001, 0b001, 0b001, 0b101, 0b010,
    // K
    0b101, 0b101, 0b110, 0b101, 0b101,
    // L
    0b100, 0b100, 0b100, 0b100, 0b111,
    // M
    0b101, 0b111, 0b111, 0b101, 0b101,
    // N
    0b101, 0b111, 0b111, 0b111, 0b101,
    // O
    0b010, 0b101, 0b101, 0b101, 0b010,
    // P
    0b110, 0b101, 0b110, 0b100, 0b100,
    // Q
    0b010, 0b101, 0b101, 0b111, 0b011,
    // R
    0b110, 0b101, 0b111, 0b110, 0b101,
    // S
    0b011, 0b100, 0b010, 0b001, 0b110,
    // T
    0b111, 0b010, 0b010, 0b010, 0b010,
    // U
    0b101, 0b101, 0b101, 0b101, 0b011,
    // V
    0b101, 0b101, 0b101, 0b010, 0b010,
    // W
    0b101, 0b101, 0b111, 0b111, 0b101,
    // X
    0b101, 0b101, 0b010, 0b101, 0b101,
    // Y
    0b101, 0b101, 0b010, 0b010, 0b010,
    // Z
    0b111, 0b001, 0b010, 0b100, 0b111,
    // [
    0b111, 0b100, 0b100, 0b100, 0b111,
    // \
    0b000, 0b100, 0b010, 0b001, 0b000,
    // ]
    0b111, 0b001, 0b001, 0b001, 0b111,
    // ^
    0b010, 0b101, 0b000, 0b000, 0b000,
    // _
    0b000, 0b000, 0b000, 0b000, 0b111,
    // `
    0b100, 0b010, 0b000, 0b000, 0b000,
    // a
    0b000, 0b110, 0b011, 0b101, 0b111,
    // b
    0b100, 0b110, 0b101, 0b101, 0b110,
    // c
    0b000, 0b011, 0b100, 0b100, 0b011,
    // d
    0b001, 0b011, 0b101, 0b101, 0b011,
    // e
    0b000, 0b011, 0b101, 0b110, 0b011,
    // f
    0b001, 0b010, 0b111, 0b010, 0b010,
    // g
    0b000, 0b011, 0b101, 0b111, 0b001,
    // h
    0b100, 0b110, 0b101, 0b101, 0b101,
    // i
    0b010, 0b000, 0b010, 0b010, 0b010,
    // j
    0b001, 0b000, 0b001, 0b101, 0b010,
    // k
    0b100, 0b101, 0b110, 0b110, 0b101,
    // l
    0b110, 0b010, 0b010, 0b010, 0b111,
    // m
    0b000, 0b111, 0b111, 0b111, 0b101,
    // n
    0b000, 0b110, 0b101, 0b101, 0b101,
    // o
    0b000, 0b010, 0b101, 0b101, 0b010,
    // p
    0b000, 0b110, 0b101, 0b110, 0b100,
    // q
    0b000, 0b011, 0b101, 0b011, 0b001,
    // r
    0b000, 0b011, 0b100, 0b100, 0b100,
    // s
    0b000, 0b011, 0b110, 0b011, 0b110,
    // t
    0b010, 0b111, 0b010, 0b010, 0b011,
    // u
    0b000, 0b101, 0b101, 0b101, 0b011,
    // v
    0b000, 0b101, 0b101, 0b111, 0b010,
    // w
    0b000, 0b101, 0b111, 0b111, 0b111,
    // x
    0b000, 0b101, 0b010, 0b010, 0b101,
    // y
    0b000, 0b101, 0b101, 0b010, 0b100,
    // z
    0b000, 0b111, 0b011, 0b110, 0b111,
    // {
    0b011, 0b010, 0b110, 0b010, 0b011,
    // |
    0b010, 0b010, 0b010, 0b010, 0b010,
    // }
    0b110, 0b010, 0b011, 0b010, 0b110,
    // ~
    0b000, 0b011, 0b110, 0b000, 0b000,
];
