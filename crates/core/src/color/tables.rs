//! Fixed lookup tables used by the color helpers

/// LED gamma correction, `round(255 * (n / 255)^2.8)` for `n` in `0..=255`.
#[rustfmt::skip]
pub(crate) const GAMMA_2_8: [u8; 256] = [
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   1,   1,   1,   1,
      1,   1,   1,   1,   1,   1,   1,   1,   1,   2,   2,   2,   2,   2,   2,   2,
      2,   3,   3,   3,   3,   3,   3,   3,   4,   4,   4,   4,   4,   5,   5,   5,
      5,   6,   6,   6,   6,   7,   7,   7,   7,   8,   8,   8,   9,   9,   9,  10,
     10,  10,  11,  11,  11,  12,  12,  13,  13,  13,  14,  14,  15,  15,  16,  16,
     17,  17,  18,  18,  19,  19,  20,  20,  21,  21,  22,  22,  23,  24,  24,  25,
     25,  26,  27,  27,  28,  29,  29,  30,  31,  32,  32,  33,  34,  35,  35,  36,
     37,  38,  39,  39,  40,  41,  42,  43,  44,  45,  46,  47,  48,  49,  50,  50,
     51,  52,  54,  55,  56,  57,  58,  59,  60,  61,  62,  63,  64,  66,  67,  68,
     69,  70,  72,  73,  74,  75,  77,  78,  79,  81,  82,  83,  85,  86,  87,  89,
     90,  92,  93,  95,  96,  98,  99, 101, 102, 104, 105, 107, 109, 110, 112, 114,
    115, 117, 119, 120, 122, 124, 126, 127, 129, 131, 133, 135, 137, 138, 140, 142,
    144, 146, 148, 150, 152, 154, 156, 158, 160, 162, 164, 167, 169, 171, 173, 175,
    177, 180, 182, 184, 186, 189, 191, 193, 196, 198, 200, 203, 205, 208, 210, 213,
    215, 218, 220, 223, 225, 228, 231, 233, 236, 239, 241, 244, 247, 249, 252, 255,
];

/// Perceptual hue warp, 512 monotonic entries in `0..=510`.
///
/// Each sixth of the hue circle is stretched with a rotated parabola
/// `f(x, h) = (-1/sqrt(2) + 2h - 2hx + sqrt(1/2 - 2 sqrt(2) h + 4h^2 + 4 sqrt(2) h x)) / 2h`
/// with stretch `h = 0.10`, mirrored on odd sectors. Values are in 512ths of a turn.
#[rustfmt::skip]
pub(crate) const HUE_SCALE: [u16; 512] = [
      0,   2,   4,   5,   7,   9,  10,  12,  13,  15,  16,  18,  19,  21,  22,  23,
     25,  26,  27,  29,  30,  31,  32,  34,  35,  36,  37,  38,  40,  41,  42,  43,
     44,  45,  46,  47,  48,  49,  50,  51,  52,  53,  54,  55,  56,  57,  58,  58,
     59,  60,  61,  62,  63,  63,  64,  65,  66,  67,  67,  68,  69,  70,  70,  71,
     72,  73,  73,  74,  75,  75,  76,  77,  77,  78,  79,  79,  80,  80,  81,  82,
     82,  83,  83,  84,  85,  85,  86,  86,  87,  87,  88,  89,  89,  90,  90,  91,
     92,  92,  93,  94,  94,  95,  96,  96,  97,  98,  98,  99, 100, 101, 101, 102,
    103, 104, 104, 105, 106, 107, 107, 108, 109, 110, 111, 112, 113, 113, 114, 115,
    116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131,
    133, 134, 135, 136, 137, 139, 140, 141, 142, 144, 145, 146, 148, 149, 150, 152,
    153, 155, 156, 158, 159, 161, 163, 164, 166, 168, 169, 171, 173, 175, 176, 178,
    180, 181, 183, 184, 186, 187, 189, 190, 192, 193, 195, 196, 197, 199, 200, 201,
    202, 204, 205, 206, 207, 208, 209, 211, 212, 213, 214, 215, 216, 217, 218, 219,
    220, 221, 222, 223, 224, 225, 226, 227, 228, 228, 229, 230, 231, 232, 233, 234,
    234, 235, 236, 237, 238, 238, 239, 240, 241, 241, 242, 243, 243, 244, 245, 246,
    246, 247, 248, 248, 249, 249, 250, 251, 251, 252, 253, 253, 254, 254, 255, 255,
    256, 257, 257, 258, 258, 259, 259, 260, 261, 261, 262, 263, 263, 264, 264, 265,
    266, 266, 267, 268, 269, 269, 270, 271, 271, 272, 273, 274, 274, 275, 276, 277,
    278, 278, 279, 280, 281, 282, 283, 284, 284, 285, 286, 287, 288, 289, 290, 291,
    292, 293, 294, 295, 296, 297, 298, 299, 300, 301, 303, 304, 305, 306, 307, 308,
    310, 311, 312, 313, 315, 316, 317, 319, 320, 322, 323, 325, 326, 328, 329, 331,
    332, 334, 336, 337, 339, 341, 343, 344, 346, 348, 349, 351, 353, 354, 356, 357,
    359, 360, 362, 363, 364, 366, 367, 368, 370, 371, 372, 373, 375, 376, 377, 378,
    379, 381, 382, 383, 384, 385, 386, 387, 388, 389, 390, 391, 392, 393, 394, 395,
    396, 397, 398, 399, 399, 400, 401, 402, 403, 404, 405, 405, 406, 407, 408, 408,
    409, 410, 411, 411, 412, 413, 414, 414, 415, 416, 416, 417, 418, 418, 419, 420,
    420, 421, 422, 422, 423, 423, 424, 425, 425, 426, 426, 427, 427, 428, 429, 429,
    430, 430, 431, 432, 432, 433, 433, 434, 435, 435, 436, 437, 437, 438, 439, 439,
    440, 441, 442, 442, 443, 444, 445, 445, 446, 447, 448, 449, 449, 450, 451, 452,
    453, 454, 454, 455, 456, 457, 458, 459, 460, 461, 462, 463, 464, 465, 466, 467,
    468, 469, 470, 471, 472, 474, 475, 476, 477, 478, 480, 481, 482, 483, 485, 486,
    487, 489, 490, 491, 493, 494, 496, 497, 499, 500, 502, 503, 505, 507, 508, 510,
];
