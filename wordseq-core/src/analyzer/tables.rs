//! Static range tables for code-point classification.
//!
//! Word-break classes follow the Unicode 17.0 `Word_Break` property, with the
//! emoji classes that UAX #29 dropped after Unicode 10 rebuilt from emoji data:
//!
//! - `EModifier`: `Emoji_Modifier`
//! - `EBaseGAZ`: U+1F466..=U+1F469
//! - `EBase`: `Emoji_Modifier_Base` minus `EBaseGAZ`
//! - `GlueAfterZWJ`: `Extended_Pictographic` with no other word-break class
//!
//! `MidNumLetQ` merges `MidNumLet` and `Single_Quote`. `Double_Quote` and
//! `WSegSpace` are left as `Other`. Code points absent from the table are `Other`.
//!
//! Ranges are inclusive, sorted, and non-overlapping.

use super::classifier::CodepointClass as C;

/// Unicode version the tables were generated from.
pub const UNICODE_VERSION: (u8, u8, u8) = (17, 0, 0);

#[rustfmt::skip]
pub(crate) static WORD_BREAK_RANGES: &[(u32, u32, C)] = &[
    (0x0000A, 0x0000A, C::LF),
    (0x0000B, 0x0000C, C::Newline),
    (0x0000D, 0x0000D, C::CR),
    (0x00027, 0x00027, C::MidNumLetQ),
    (0x0002C, 0x0002C, C::MidNum),
    (0x0002E, 0x0002E, C::MidNumLetQ),
    (0x00030, 0x00039, C::Numeric),
    (0x0003A, 0x0003A, C::MidLetter),
    (0x0003B, 0x0003B, C::MidNum),
    (0x00041, 0x0005A, C::AHLetter),
    (0x0005F, 0x0005F, C::ExtendNumLet),
    (0x00061, 0x0007A, C::AHLetter),
    (0x00085, 0x00085, C::Newline),
    (0x000A9, 0x000A9, C::GlueAfterZWJ),
    (0x000AA, 0x000AA, C::AHLetter),
    (0x000AD, 0x000AD, C::Format),
    (0x000AE, 0x000AE, C::GlueAfterZWJ),
    (0x000B5, 0x000B5, C::AHLetter),
    (0x000B7, 0x000B7, C::MidLetter),
    (0x000B8, 0x000B8, C::AHLetter),
    (0x000BA, 0x000BA, C::AHLetter),
    (0x000C0, 0x000D6, C::AHLetter),
    (0x000D8, 0x000F6, C::AHLetter),
    (0x000F8, 0x002D7, C::AHLetter),
    (0x002DE, 0x002FF, C::AHLetter),
    (0x00300, 0x0036F, C::Extend),
    (0x00370, 0x00374, C::AHLetter),
    (0x00376, 0x00377, C::AHLetter),
    (0x0037A, 0x0037D, C::AHLetter),
    (0x0037E, 0x0037E, C::MidNum),
    (0x0037F, 0x0037F, C::AHLetter),
    (0x00386, 0x00386, C::AHLetter),
    (0x00387, 0x00387, C::MidLetter),
    (0x00388, 0x0038A, C::AHLetter),
    (0x0038C, 0x0038C, C::AHLetter),
    (0x0038E, 0x003A1, C::AHLetter),
    (0x003A3, 0x003F5, C::AHLetter),
    (0x003F7, 0x00481, C::AHLetter),
    (0x00483, 0x00489, C::Extend),
    (0x0048A, 0x0052F, C::AHLetter),
    (0x00531, 0x00556, C::AHLetter),
    (0x00559, 0x0055C, C::AHLetter),
    (0x0055E, 0x0055E, C::AHLetter),
    (0x0055F, 0x0055F, C::MidLetter),
    (0x00560, 0x00588, C::AHLetter),
    (0x00589, 0x00589, C::MidNum),
    (0x0058A, 0x0058A, C::AHLetter),
    (0x00591, 0x005BD, C::Extend),
    (0x005BF, 0x005BF, C::Extend),
    (0x005C1, 0x005C2, C::Extend),
    (0x005C4, 0x005C5, C::Extend),
    (0x005C7, 0x005C7, C::Extend),
    (0x005D0, 0x005EA, C::HebrewLetter),
    (0x005EF, 0x005F2, C::HebrewLetter),
    (0x005F3, 0x005F3, C::AHLetter),
    (0x005F4, 0x005F4, C::MidLetter),
    (0x00600, 0x00605, C::Numeric),
    (0x0060C, 0x0060D, C::MidNum),
    (0x00610, 0x0061A, C::Extend),
    (0x0061C, 0x0061C, C::Format),
    (0x00620, 0x0064A, C::AHLetter),
    (0x0064B, 0x0065F, C::Extend),
    (0x00660, 0x00669, C::Numeric),
    (0x0066B, 0x0066B, C::Numeric),
    (0x0066C, 0x0066C, C::MidNum),
    (0x0066E, 0x0066F, C::AHLetter),
    (0x00670, 0x00670, C::Extend),
    (0x00671, 0x006D3, C::AHLetter),
    (0x006D5, 0x006D5, C::AHLetter),
    (0x006D6, 0x006DC, C::Extend),
    (0x006DD, 0x006DD, C::Numeric),
    (0x006DF, 0x006E4, C::Extend),
    (0x006E5, 0x006E6, C::AHLetter),
    (0x006E7, 0x006E8, C::Extend),
    (0x006EA, 0x006ED, C::Extend),
    (0x006EE, 0x006EF, C::AHLetter),
    (0x006F0, 0x006F9, C::Numeric),
    (0x006FA, 0x006FC, C::AHLetter),
    (0x006FF, 0x006FF, C::AHLetter),
    (0x0070F, 0x00710, C::AHLetter),
    (0x00711, 0x00711, C::Extend),
    (0x00712, 0x0072F, C::AHLetter),
    (0x00730, 0x0074A, C::Extend),
    (0x0074D, 0x007A5, C::AHLetter),
    (0x007A6, 0x007B0, C::Extend),
    (0x007B1, 0x007B1, C::AHLetter),
    (0x007C0, 0x007C9, C::Numeric),
    (0x007CA, 0x007EA, C::AHLetter),
    (0x007EB, 0x007F3, C::Extend),
    (0x007F4, 0x007F5, C::AHLetter),
    (0x007F8, 0x007F8, C::MidNum),
    (0x007FA, 0x007FA, C::AHLetter),
    (0x007FD, 0x007FD, C::Extend),
    (0x00800, 0x00815, C::AHLetter),
    (0x00816, 0x00819, C::Extend),
    (0x0081A, 0x0081A, C::AHLetter),
    (0x0081B, 0x00823, C::Extend),
    (0x00824, 0x00824, C::AHLetter),
    (0x00825, 0x00827, C::Extend),
    (0x00828, 0x00828, C::AHLetter),
    (0x00829, 0x0082D, C::Extend),
    (0x00840, 0x00858, C::AHLetter),
    (0x00859, 0x0085B, C::Extend),
    (0x00860, 0x0086A, C::AHLetter),
    (0x00870, 0x00887, C::AHLetter),
    (0x00889, 0x0088F, C::AHLetter),
    (0x00890, 0x00891, C::Numeric),
    (0x00897, 0x0089F, C::Extend),
    (0x008A0, 0x008C9, C::AHLetter),
    (0x008CA, 0x008E1, C::Extend),
    (0x008E2, 0x008E2, C::Numeric),
    (0x008E3, 0x00903, C::Extend),
    (0x00904, 0x00939, C::AHLetter),
    (0x0093A, 0x0093C, C::Extend),
    (0x0093D, 0x0093D, C::AHLetter),
    (0x0093E, 0x0094F, C::Extend),
    (0x00950, 0x00950, C::AHLetter),
    (0x00951, 0x00957, C::Extend),
    (0x00958, 0x00961, C::AHLetter),
    (0x00962, 0x00963, C::Extend),
    (0x00966, 0x0096F, C::Numeric),
    (0x00971, 0x00980, C::AHLetter),
    (0x00981, 0x00983, C::Extend),
    (0x00985, 0x0098C, C::AHLetter),
    (0x0098F, 0x00990, C::AHLetter),
    (0x00993, 0x009A8, C::AHLetter),
    (0x009AA, 0x009B0, C::AHLetter),
    (0x009B2, 0x009B2, C::AHLetter),
    (0x009B6, 0x009B9, C::AHLetter),
    (0x009BC, 0x009BC, C::Extend),
    (0x009BD, 0x009BD, C::AHLetter),
    (0x009BE, 0x009C4, C::Extend),
    (0x009C7, 0x009C8, C::Extend),
    (0x009CB, 0x009CD, C::Extend),
    (0x009CE, 0x009CE, C::AHLetter),
    (0x009D7, 0x009D7, C::Extend),
    (0x009DC, 0x009DD, C::AHLetter),
    (0x009DF, 0x009E1, C::AHLetter),
    (0x009E2, 0x009E3, C::Extend),
    (0x009E6, 0x009EF, C::Numeric),
    (0x009F0, 0x009F1, C::AHLetter),
    (0x009FC, 0x009FC, C::AHLetter),
    (0x009FE, 0x009FE, C::Extend),
    (0x00A01, 0x00A03, C::Extend),
    (0x00A05, 0x00A0A, C::AHLetter),
    (0x00A0F, 0x00A10, C::AHLetter),
    (0x00A13, 0x00A28, C::AHLetter),
    (0x00A2A, 0x00A30, C::AHLetter),
    (0x00A32, 0x00A33, C::AHLetter),
    (0x00A35, 0x00A36, C::AHLetter),
    (0x00A38, 0x00A39, C::AHLetter),
    (0x00A3C, 0x00A3C, C::Extend),
    (0x00A3E, 0x00A42, C::Extend),
    (0x00A47, 0x00A48, C::Extend),
    (0x00A4B, 0x00A4D, C::Extend),
    (0x00A51, 0x00A51, C::Extend),
    (0x00A59, 0x00A5C, C::AHLetter),
    (0x00A5E, 0x00A5E, C::AHLetter),
    (0x00A66, 0x00A6F, C::Numeric),
    (0x00A70, 0x00A71, C::Extend),
    (0x00A72, 0x00A74, C::AHLetter),
    (0x00A75, 0x00A75, C::Extend),
    (0x00A81, 0x00A83, C::Extend),
    (0x00A85, 0x00A8D, C::AHLetter),
    (0x00A8F, 0x00A91, C::AHLetter),
    (0x00A93, 0x00AA8, C::AHLetter),
    (0x00AAA, 0x00AB0, C::AHLetter),
    (0x00AB2, 0x00AB3, C::AHLetter),
    (0x00AB5, 0x00AB9, C::AHLetter),
    (0x00ABC, 0x00ABC, C::Extend),
    (0x00ABD, 0x00ABD, C::AHLetter),
    (0x00ABE, 0x00AC5, C::Extend),
    (0x00AC7, 0x00AC9, C::Extend),
    (0x00ACB, 0x00ACD, C::Extend),
    (0x00AD0, 0x00AD0, C::AHLetter),
    (0x00AE0, 0x00AE1, C::AHLetter),
    (0x00AE2, 0x00AE3, C::Extend),
    (0x00AE6, 0x00AEF, C::Numeric),
    (0x00AF9, 0x00AF9, C::AHLetter),
    (0x00AFA, 0x00AFF, C::Extend),
    (0x00B01, 0x00B03, C::Extend),
    (0x00B05, 0x00B0C, C::AHLetter),
    (0x00B0F, 0x00B10, C::AHLetter),
    (0x00B13, 0x00B28, C::AHLetter),
    (0x00B2A, 0x00B30, C::AHLetter),
    (0x00B32, 0x00B33, C::AHLetter),
    (0x00B35, 0x00B39, C::AHLetter),
    (0x00B3C, 0x00B3C, C::Extend),
    (0x00B3D, 0x00B3D, C::AHLetter),
    (0x00B3E, 0x00B44, C::Extend),
    (0x00B47, 0x00B48, C::Extend),
    (0x00B4B, 0x00B4D, C::Extend),
    (0x00B55, 0x00B57, C::Extend),
    (0x00B5C, 0x00B5D, C::AHLetter),
    (0x00B5F, 0x00B61, C::AHLetter),
    (0x00B62, 0x00B63, C::Extend),
    (0x00B66, 0x00B6F, C::Numeric),
    (0x00B71, 0x00B71, C::AHLetter),
    (0x00B82, 0x00B82, C::Extend),
    (0x00B83, 0x00B83, C::AHLetter),
    (0x00B85, 0x00B8A, C::AHLetter),
    (0x00B8E, 0x00B90, C::AHLetter),
    (0x00B92, 0x00B95, C::AHLetter),
    (0x00B99, 0x00B9A, C::AHLetter),
    (0x00B9C, 0x00B9C, C::AHLetter),
    (0x00B9E, 0x00B9F, C::AHLetter),
    (0x00BA3, 0x00BA4, C::AHLetter),
    (0x00BA8, 0x00BAA, C::AHLetter),
    (0x00BAE, 0x00BB9, C::AHLetter),
    (0x00BBE, 0x00BC2, C::Extend),
    (0x00BC6, 0x00BC8, C::Extend),
    (0x00BCA, 0x00BCD, C::Extend),
    (0x00BD0, 0x00BD0, C::AHLetter),
    (0x00BD7, 0x00BD7, C::Extend),
    (0x00BE6, 0x00BEF, C::Numeric),
    (0x00C00, 0x00C04, C::Extend),
    (0x00C05, 0x00C0C, C::AHLetter),
    (0x00C0E, 0x00C10, C::AHLetter),
    (0x00C12, 0x00C28, C::AHLetter),
    (0x00C2A, 0x00C39, C::AHLetter),
    (0x00C3C, 0x00C3C, C::Extend),
    (0x00C3D, 0x00C3D, C::AHLetter),
    (0x00C3E, 0x00C44, C::Extend),
    (0x00C46, 0x00C48, C::Extend),
    (0x00C4A, 0x00C4D, C::Extend),
    (0x00C55, 0x00C56, C::Extend),
    (0x00C58, 0x00C5A, C::AHLetter),
    (0x00C5C, 0x00C5D, C::AHLetter),
    (0x00C60, 0x00C61, C::AHLetter),
    (0x00C62, 0x00C63, C::Extend),
    (0x00C66, 0x00C6F, C::Numeric),
    (0x00C80, 0x00C80, C::AHLetter),
    (0x00C81, 0x00C83, C::Extend),
    (0x00C85, 0x00C8C, C::AHLetter),
    (0x00C8E, 0x00C90, C::AHLetter),
    (0x00C92, 0x00CA8, C::AHLetter),
    (0x00CAA, 0x00CB3, C::AHLetter),
    (0x00CB5, 0x00CB9, C::AHLetter),
    (0x00CBC, 0x00CBC, C::Extend),
    (0x00CBD, 0x00CBD, C::AHLetter),
    (0x00CBE, 0x00CC4, C::Extend),
    (0x00CC6, 0x00CC8, C::Extend),
    (0x00CCA, 0x00CCD, C::Extend),
    (0x00CD5, 0x00CD6, C::Extend),
    (0x00CDC, 0x00CDE, C::AHLetter),
    (0x00CE0, 0x00CE1, C::AHLetter),
    (0x00CE2, 0x00CE3, C::Extend),
    (0x00CE6, 0x00CEF, C::Numeric),
    (0x00CF1, 0x00CF2, C::AHLetter),
    (0x00CF3, 0x00CF3, C::Extend),
    (0x00D00, 0x00D03, C::Extend),
    (0x00D04, 0x00D0C, C::AHLetter),
    (0x00D0E, 0x00D10, C::AHLetter),
    (0x00D12, 0x00D3A, C::AHLetter),
    (0x00D3B, 0x00D3C, C::Extend),
    (0x00D3D, 0x00D3D, C::AHLetter),
    (0x00D3E, 0x00D44, C::Extend),
    (0x00D46, 0x00D48, C::Extend),
    (0x00D4A, 0x00D4D, C::Extend),
    (0x00D4E, 0x00D4E, C::AHLetter),
    (0x00D54, 0x00D56, C::AHLetter),
    (0x00D57, 0x00D57, C::Extend),
    (0x00D5F, 0x00D61, C::AHLetter),
    (0x00D62, 0x00D63, C::Extend),
    (0x00D66, 0x00D6F, C::Numeric),
    (0x00D7A, 0x00D7F, C::AHLetter),
    (0x00D81, 0x00D83, C::Extend),
    (0x00D85, 0x00D96, C::AHLetter),
    (0x00D9A, 0x00DB1, C::AHLetter),
    (0x00DB3, 0x00DBB, C::AHLetter),
    (0x00DBD, 0x00DBD, C::AHLetter),
    (0x00DC0, 0x00DC6, C::AHLetter),
    (0x00DCA, 0x00DCA, C::Extend),
    (0x00DCF, 0x00DD4, C::Extend),
    (0x00DD6, 0x00DD6, C::Extend),
    (0x00DD8, 0x00DDF, C::Extend),
    (0x00DE6, 0x00DEF, C::Numeric),
    (0x00DF2, 0x00DF3, C::Extend),
    (0x00E31, 0x00E31, C::Extend),
    (0x00E34, 0x00E3A, C::Extend),
    (0x00E47, 0x00E4E, C::Extend),
    (0x00E50, 0x00E59, C::Numeric),
    (0x00EB1, 0x00EB1, C::Extend),
    (0x00EB4, 0x00EBC, C::Extend),
    (0x00EC8, 0x00ECE, C::Extend),
    (0x00ED0, 0x00ED9, C::Numeric),
    (0x00F00, 0x00F00, C::AHLetter),
    (0x00F18, 0x00F19, C::Extend),
    (0x00F20, 0x00F29, C::Numeric),
    (0x00F35, 0x00F35, C::Extend),
    (0x00F37, 0x00F37, C::Extend),
    (0x00F39, 0x00F39, C::Extend),
    (0x00F3E, 0x00F3F, C::Extend),
    (0x00F40, 0x00F47, C::AHLetter),
    (0x00F49, 0x00F6C, C::AHLetter),
    (0x00F71, 0x00F84, C::Extend),
    (0x00F86, 0x00F87, C::Extend),
    (0x00F88, 0x00F8C, C::AHLetter),
    (0x00F8D, 0x00F97, C::Extend),
    (0x00F99, 0x00FBC, C::Extend),
    (0x00FC6, 0x00FC6, C::Extend),
    (0x0102B, 0x0103E, C::Extend),
    (0x01040, 0x01049, C::Numeric),
    (0x01056, 0x01059, C::Extend),
    (0x0105E, 0x01060, C::Extend),
    (0x01062, 0x01064, C::Extend),
    (0x01067, 0x0106D, C::Extend),
    (0x01071, 0x01074, C::Extend),
    (0x01082, 0x0108D, C::Extend),
    (0x0108F, 0x0108F, C::Extend),
    (0x01090, 0x01099, C::Numeric),
    (0x0109A, 0x0109D, C::Extend),
    (0x010A0, 0x010C5, C::AHLetter),
    (0x010C7, 0x010C7, C::AHLetter),
    (0x010CD, 0x010CD, C::AHLetter),
    (0x010D0, 0x010FA, C::AHLetter),
    (0x010FC, 0x01248, C::AHLetter),
    (0x0124A, 0x0124D, C::AHLetter),
    (0x01250, 0x01256, C::AHLetter),
    (0x01258, 0x01258, C::AHLetter),
    (0x0125A, 0x0125D, C::AHLetter),
    (0x01260, 0x01288, C::AHLetter),
    (0x0128A, 0x0128D, C::AHLetter),
    (0x01290, 0x012B0, C::AHLetter),
    (0x012B2, 0x012B5, C::AHLetter),
    (0x012B8, 0x012BE, C::AHLetter),
    (0x012C0, 0x012C0, C::AHLetter),
    (0x012C2, 0x012C5, C::AHLetter),
    (0x012C8, 0x012D6, C::AHLetter),
    (0x012D8, 0x01310, C::AHLetter),
    (0x01312, 0x01315, C::AHLetter),
    (0x01318, 0x0135A, C::AHLetter),
    (0x0135D, 0x0135F, C::Extend),
    (0x01380, 0x0138F, C::AHLetter),
    (0x013A0, 0x013F5, C::AHLetter),
    (0x013F8, 0x013FD, C::AHLetter),
    (0x01401, 0x0166C, C::AHLetter),
    (0x0166F, 0x0167F, C::AHLetter),
    (0x01681, 0x0169A, C::AHLetter),
    (0x016A0, 0x016EA, C::AHLetter),
    (0x016EE, 0x016F8, C::AHLetter),
    (0x01700, 0x01711, C::AHLetter),
    (0x01712, 0x01715, C::Extend),
    (0x0171F, 0x01731, C::AHLetter),
    (0x01732, 0x01734, C::Extend),
    (0x01740, 0x01751, C::AHLetter),
    (0x01752, 0x01753, C::Extend),
    (0x01760, 0x0176C, C::AHLetter),
    (0x0176E, 0x01770, C::AHLetter),
    (0x01772, 0x01773, C::Extend),
    (0x017B4, 0x017D3, C::Extend),
    (0x017DD, 0x017DD, C::Extend),
    (0x017E0, 0x017E9, C::Numeric),
    (0x0180B, 0x0180D, C::Extend),
    (0x0180E, 0x0180E, C::Format),
    (0x0180F, 0x0180F, C::Extend),
    (0x01810, 0x01819, C::Numeric),
    (0x01820, 0x01878, C::AHLetter),
    (0x01880, 0x01884, C::AHLetter),
    (0x01885, 0x01886, C::Extend),
    (0x01887, 0x018A8, C::AHLetter),
    (0x018A9, 0x018A9, C::Extend),
    (0x018AA, 0x018AA, C::AHLetter),
    (0x018B0, 0x018F5, C::AHLetter),
    (0x01900, 0x0191E, C::AHLetter),
    (0x01920, 0x0192B, C::Extend),
    (0x01930, 0x0193B, C::Extend),
    (0x01946, 0x0194F, C::Numeric),
    (0x019D0, 0x019DA, C::Numeric),
    (0x01A00, 0x01A16, C::AHLetter),
    (0x01A17, 0x01A1B, C::Extend),
    (0x01A55, 0x01A5E, C::Extend),
    (0x01A60, 0x01A7C, C::Extend),
    (0x01A7F, 0x01A7F, C::Extend),
    (0x01A80, 0x01A89, C::Numeric),
    (0x01A90, 0x01A99, C::Numeric),
    (0x01AB0, 0x01ADD, C::Extend),
    (0x01AE0, 0x01AEB, C::Extend),
    (0x01B00, 0x01B04, C::Extend),
    (0x01B05, 0x01B33, C::AHLetter),
    (0x01B34, 0x01B44, C::Extend),
    (0x01B45, 0x01B4C, C::AHLetter),
    (0x01B50, 0x01B59, C::Numeric),
    (0x01B6B, 0x01B73, C::Extend),
    (0x01B80, 0x01B82, C::Extend),
    (0x01B83, 0x01BA0, C::AHLetter),
    (0x01BA1, 0x01BAD, C::Extend),
    (0x01BAE, 0x01BAF, C::AHLetter),
    (0x01BB0, 0x01BB9, C::Numeric),
    (0x01BBA, 0x01BE5, C::AHLetter),
    (0x01BE6, 0x01BF3, C::Extend),
    (0x01C00, 0x01C23, C::AHLetter),
    (0x01C24, 0x01C37, C::Extend),
    (0x01C40, 0x01C49, C::Numeric),
    (0x01C4D, 0x01C4F, C::AHLetter),
    (0x01C50, 0x01C59, C::Numeric),
    (0x01C5A, 0x01C7D, C::AHLetter),
    (0x01C80, 0x01C8A, C::AHLetter),
    (0x01C90, 0x01CBA, C::AHLetter),
    (0x01CBD, 0x01CBF, C::AHLetter),
    (0x01CD0, 0x01CD2, C::Extend),
    (0x01CD4, 0x01CE8, C::Extend),
    (0x01CE9, 0x01CEC, C::AHLetter),
    (0x01CED, 0x01CED, C::Extend),
    (0x01CEE, 0x01CF3, C::AHLetter),
    (0x01CF4, 0x01CF4, C::Extend),
    (0x01CF5, 0x01CF6, C::AHLetter),
    (0x01CF7, 0x01CF9, C::Extend),
    (0x01CFA, 0x01CFA, C::AHLetter),
    (0x01D00, 0x01DBF, C::AHLetter),
    (0x01DC0, 0x01DFF, C::Extend),
    (0x01E00, 0x01F15, C::AHLetter),
    (0x01F18, 0x01F1D, C::AHLetter),
    (0x01F20, 0x01F45, C::AHLetter),
    (0x01F48, 0x01F4D, C::AHLetter),
    (0x01F50, 0x01F57, C::AHLetter),
    (0x01F59, 0x01F59, C::AHLetter),
    (0x01F5B, 0x01F5B, C::AHLetter),
    (0x01F5D, 0x01F5D, C::AHLetter),
    (0x01F5F, 0x01F7D, C::AHLetter),
    (0x01F80, 0x01FB4, C::AHLetter),
    (0x01FB6, 0x01FBC, C::AHLetter),
    (0x01FBE, 0x01FBE, C::AHLetter),
    (0x01FC2, 0x01FC4, C::AHLetter),
    (0x01FC6, 0x01FCC, C::AHLetter),
    (0x01FD0, 0x01FD3, C::AHLetter),
    (0x01FD6, 0x01FDB, C::AHLetter),
    (0x01FE0, 0x01FEC, C::AHLetter),
    (0x01FF2, 0x01FF4, C::AHLetter),
    (0x01FF6, 0x01FFC, C::AHLetter),
    (0x0200C, 0x0200C, C::Extend),
    (0x0200D, 0x0200D, C::ZWJ),
    (0x0200E, 0x0200F, C::Format),
    (0x02018, 0x02019, C::MidNumLetQ),
    (0x02024, 0x02024, C::MidNumLetQ),
    (0x02027, 0x02027, C::MidLetter),
    (0x02028, 0x02029, C::Newline),
    (0x0202A, 0x0202E, C::Format),
    (0x0202F, 0x0202F, C::ExtendNumLet),
    (0x0203C, 0x0203C, C::GlueAfterZWJ),
    (0x0203F, 0x02040, C::ExtendNumLet),
    (0x02044, 0x02044, C::MidNum),
    (0x02049, 0x02049, C::GlueAfterZWJ),
    (0x02054, 0x02054, C::ExtendNumLet),
    (0x02060, 0x02064, C::Format),
    (0x02066, 0x0206F, C::Format),
    (0x02071, 0x02071, C::AHLetter),
    (0x0207F, 0x0207F, C::AHLetter),
    (0x02090, 0x0209C, C::AHLetter),
    (0x020D0, 0x020F0, C::Extend),
    (0x02102, 0x02102, C::AHLetter),
    (0x02107, 0x02107, C::AHLetter),
    (0x0210A, 0x02113, C::AHLetter),
    (0x02115, 0x02115, C::AHLetter),
    (0x02119, 0x0211D, C::AHLetter),
    (0x02122, 0x02122, C::GlueAfterZWJ),
    (0x02124, 0x02124, C::AHLetter),
    (0x02126, 0x02126, C::AHLetter),
    (0x02128, 0x02128, C::AHLetter),
    (0x0212A, 0x0212D, C::AHLetter),
    (0x0212F, 0x02139, C::AHLetter),
    (0x0213C, 0x0213F, C::AHLetter),
    (0x02145, 0x02149, C::AHLetter),
    (0x0214E, 0x0214E, C::AHLetter),
    (0x02160, 0x02188, C::AHLetter),
    (0x02194, 0x02199, C::GlueAfterZWJ),
    (0x021A9, 0x021AA, C::GlueAfterZWJ),
    (0x0231A, 0x0231B, C::GlueAfterZWJ),
    (0x02328, 0x02328, C::GlueAfterZWJ),
    (0x023CF, 0x023CF, C::GlueAfterZWJ),
    (0x023E9, 0x023F3, C::GlueAfterZWJ),
    (0x023F8, 0x023FA, C::GlueAfterZWJ),
    (0x024B6, 0x024E9, C::AHLetter),
    (0x025AA, 0x025AB, C::GlueAfterZWJ),
    (0x025B6, 0x025B6, C::GlueAfterZWJ),
    (0x025C0, 0x025C0, C::GlueAfterZWJ),
    (0x025FB, 0x025FE, C::GlueAfterZWJ),
    (0x02600, 0x02604, C::GlueAfterZWJ),
    (0x0260E, 0x0260E, C::GlueAfterZWJ),
    (0x02611, 0x02611, C::GlueAfterZWJ),
    (0x02614, 0x02615, C::GlueAfterZWJ),
    (0x02618, 0x02618, C::GlueAfterZWJ),
    (0x0261D, 0x0261D, C::EBase),
    (0x02620, 0x02620, C::GlueAfterZWJ),
    (0x02622, 0x02623, C::GlueAfterZWJ),
    (0x02626, 0x02626, C::GlueAfterZWJ),
    (0x0262A, 0x0262A, C::GlueAfterZWJ),
    (0x0262E, 0x0262F, C::GlueAfterZWJ),
    (0x02638, 0x0263A, C::GlueAfterZWJ),
    (0x02640, 0x02640, C::GlueAfterZWJ),
    (0x02642, 0x02642, C::GlueAfterZWJ),
    (0x02648, 0x02653, C::GlueAfterZWJ),
    (0x0265F, 0x02660, C::GlueAfterZWJ),
    (0x02663, 0x02663, C::GlueAfterZWJ),
    (0x02665, 0x02666, C::GlueAfterZWJ),
    (0x02668, 0x02668, C::GlueAfterZWJ),
    (0x0267B, 0x0267B, C::GlueAfterZWJ),
    (0x0267E, 0x0267F, C::GlueAfterZWJ),
    (0x02692, 0x02697, C::GlueAfterZWJ),
    (0x02699, 0x02699, C::GlueAfterZWJ),
    (0x0269B, 0x0269C, C::GlueAfterZWJ),
    (0x026A0, 0x026A1, C::GlueAfterZWJ),
    (0x026A7, 0x026A7, C::GlueAfterZWJ),
    (0x026AA, 0x026AB, C::GlueAfterZWJ),
    (0x026B0, 0x026B1, C::GlueAfterZWJ),
    (0x026BD, 0x026BE, C::GlueAfterZWJ),
    (0x026C4, 0x026C5, C::GlueAfterZWJ),
    (0x026C8, 0x026C8, C::GlueAfterZWJ),
    (0x026CE, 0x026CF, C::GlueAfterZWJ),
    (0x026D1, 0x026D1, C::GlueAfterZWJ),
    (0x026D3, 0x026D4, C::GlueAfterZWJ),
    (0x026E9, 0x026EA, C::GlueAfterZWJ),
    (0x026F0, 0x026F5, C::GlueAfterZWJ),
    (0x026F7, 0x026F8, C::GlueAfterZWJ),
    (0x026F9, 0x026F9, C::EBase),
    (0x026FA, 0x026FA, C::GlueAfterZWJ),
    (0x026FD, 0x026FD, C::GlueAfterZWJ),
    (0x02702, 0x02702, C::GlueAfterZWJ),
    (0x02705, 0x02705, C::GlueAfterZWJ),
    (0x02708, 0x02709, C::GlueAfterZWJ),
    (0x0270A, 0x0270D, C::EBase),
    (0x0270F, 0x0270F, C::GlueAfterZWJ),
    (0x02712, 0x02712, C::GlueAfterZWJ),
    (0x02714, 0x02714, C::GlueAfterZWJ),
    (0x02716, 0x02716, C::GlueAfterZWJ),
    (0x0271D, 0x0271D, C::GlueAfterZWJ),
    (0x02721, 0x02721, C::GlueAfterZWJ),
    (0x02728, 0x02728, C::GlueAfterZWJ),
    (0x02733, 0x02734, C::GlueAfterZWJ),
    (0x02744, 0x02744, C::GlueAfterZWJ),
    (0x02747, 0x02747, C::GlueAfterZWJ),
    (0x0274C, 0x0274C, C::GlueAfterZWJ),
    (0x0274E, 0x0274E, C::GlueAfterZWJ),
    (0x02753, 0x02755, C::GlueAfterZWJ),
    (0x02757, 0x02757, C::GlueAfterZWJ),
    (0x02763, 0x02764, C::GlueAfterZWJ),
    (0x02795, 0x02797, C::GlueAfterZWJ),
    (0x027A1, 0x027A1, C::GlueAfterZWJ),
    (0x027B0, 0x027B0, C::GlueAfterZWJ),
    (0x027BF, 0x027BF, C::GlueAfterZWJ),
    (0x02934, 0x02935, C::GlueAfterZWJ),
    (0x02B05, 0x02B07, C::GlueAfterZWJ),
    (0x02B1B, 0x02B1C, C::GlueAfterZWJ),
    (0x02B50, 0x02B50, C::GlueAfterZWJ),
    (0x02B55, 0x02B55, C::GlueAfterZWJ),
    (0x02C00, 0x02CE4, C::AHLetter),
    (0x02CEB, 0x02CEE, C::AHLetter),
    (0x02CEF, 0x02CF1, C::Extend),
    (0x02CF2, 0x02CF3, C::AHLetter),
    (0x02D00, 0x02D25, C::AHLetter),
    (0x02D27, 0x02D27, C::AHLetter),
    (0x02D2D, 0x02D2D, C::AHLetter),
    (0x02D30, 0x02D67, C::AHLetter),
    (0x02D6F, 0x02D6F, C::AHLetter),
    (0x02D7F, 0x02D7F, C::Extend),
    (0x02D80, 0x02D96, C::AHLetter),
    (0x02DA0, 0x02DA6, C::AHLetter),
    (0x02DA8, 0x02DAE, C::AHLetter),
    (0x02DB0, 0x02DB6, C::AHLetter),
    (0x02DB8, 0x02DBE, C::AHLetter),
    (0x02DC0, 0x02DC6, C::AHLetter),
    (0x02DC8, 0x02DCE, C::AHLetter),
    (0x02DD0, 0x02DD6, C::AHLetter),
    (0x02DD8, 0x02DDE, C::AHLetter),
    (0x02DE0, 0x02DFF, C::Extend),
    (0x02E2F, 0x02E2F, C::AHLetter),
    (0x03005, 0x03005, C::AHLetter),
    (0x0302A, 0x0302F, C::Extend),
    (0x03030, 0x03030, C::GlueAfterZWJ),
    (0x03031, 0x03035, C::Katakana),
    (0x0303B, 0x0303C, C::AHLetter),
    (0x0303D, 0x0303D, C::GlueAfterZWJ),
    (0x03099, 0x0309A, C::Extend),
    (0x0309B, 0x0309C, C::Katakana),
    (0x030A0, 0x030FA, C::Katakana),
    (0x030FC, 0x030FF, C::Katakana),
    (0x03105, 0x0312F, C::AHLetter),
    (0x03131, 0x0318E, C::AHLetter),
    (0x031A0, 0x031BF, C::AHLetter),
    (0x031F0, 0x031FF, C::Katakana),
    (0x03297, 0x03297, C::GlueAfterZWJ),
    (0x03299, 0x03299, C::GlueAfterZWJ),
    (0x032D0, 0x032FE, C::Katakana),
    (0x03300, 0x03357, C::Katakana),
    (0x0A000, 0x0A48C, C::AHLetter),
    (0x0A4D0, 0x0A4FD, C::AHLetter),
    (0x0A500, 0x0A60C, C::AHLetter),
    (0x0A610, 0x0A61F, C::AHLetter),
    (0x0A620, 0x0A629, C::Numeric),
    (0x0A62A, 0x0A62B, C::AHLetter),
    (0x0A640, 0x0A66E, C::AHLetter),
    (0x0A66F, 0x0A672, C::Extend),
    (0x0A674, 0x0A67D, C::Extend),
    (0x0A67F, 0x0A69D, C::AHLetter),
    (0x0A69E, 0x0A69F, C::Extend),
    (0x0A6A0, 0x0A6EF, C::AHLetter),
    (0x0A6F0, 0x0A6F1, C::Extend),
    (0x0A708, 0x0A7DC, C::AHLetter),
    (0x0A7F1, 0x0A801, C::AHLetter),
    (0x0A802, 0x0A802, C::Extend),
    (0x0A803, 0x0A805, C::AHLetter),
    (0x0A806, 0x0A806, C::Extend),
    (0x0A807, 0x0A80A, C::AHLetter),
    (0x0A80B, 0x0A80B, C::Extend),
    (0x0A80C, 0x0A822, C::AHLetter),
    (0x0A823, 0x0A827, C::Extend),
    (0x0A82C, 0x0A82C, C::Extend),
    (0x0A840, 0x0A873, C::AHLetter),
    (0x0A880, 0x0A881, C::Extend),
    (0x0A882, 0x0A8B3, C::AHLetter),
    (0x0A8B4, 0x0A8C5, C::Extend),
    (0x0A8D0, 0x0A8D9, C::Numeric),
    (0x0A8E0, 0x0A8F1, C::Extend),
    (0x0A8F2, 0x0A8F7, C::AHLetter),
    (0x0A8FB, 0x0A8FB, C::AHLetter),
    (0x0A8FD, 0x0A8FE, C::AHLetter),
    (0x0A8FF, 0x0A8FF, C::Extend),
    (0x0A900, 0x0A909, C::Numeric),
    (0x0A90A, 0x0A925, C::AHLetter),
    (0x0A926, 0x0A92D, C::Extend),
    (0x0A930, 0x0A946, C::AHLetter),
    (0x0A947, 0x0A953, C::Extend),
    (0x0A960, 0x0A97C, C::AHLetter),
    (0x0A980, 0x0A983, C::Extend),
    (0x0A984, 0x0A9B2, C::AHLetter),
    (0x0A9B3, 0x0A9C0, C::Extend),
    (0x0A9CF, 0x0A9CF, C::AHLetter),
    (0x0A9D0, 0x0A9D9, C::Numeric),
    (0x0A9E5, 0x0A9E5, C::Extend),
    (0x0A9F0, 0x0A9F9, C::Numeric),
    (0x0AA00, 0x0AA28, C::AHLetter),
    (0x0AA29, 0x0AA36, C::Extend),
    (0x0AA40, 0x0AA42, C::AHLetter),
    (0x0AA43, 0x0AA43, C::Extend),
    (0x0AA44, 0x0AA4B, C::AHLetter),
    (0x0AA4C, 0x0AA4D, C::Extend),
    (0x0AA50, 0x0AA59, C::Numeric),
    (0x0AA7B, 0x0AA7D, C::Extend),
    (0x0AAB0, 0x0AAB0, C::Extend),
    (0x0AAB2, 0x0AAB4, C::Extend),
    (0x0AAB7, 0x0AAB8, C::Extend),
    (0x0AABE, 0x0AABF, C::Extend),
    (0x0AAC1, 0x0AAC1, C::Extend),
    (0x0AAE0, 0x0AAEA, C::AHLetter),
    (0x0AAEB, 0x0AAEF, C::Extend),
    (0x0AAF2, 0x0AAF4, C::AHLetter),
    (0x0AAF5, 0x0AAF6, C::Extend),
    (0x0AB01, 0x0AB06, C::AHLetter),
    (0x0AB09, 0x0AB0E, C::AHLetter),
    (0x0AB11, 0x0AB16, C::AHLetter),
    (0x0AB20, 0x0AB26, C::AHLetter),
    (0x0AB28, 0x0AB2E, C::AHLetter),
    (0x0AB30, 0x0AB69, C::AHLetter),
    (0x0AB70, 0x0ABE2, C::AHLetter),
    (0x0ABE3, 0x0ABEA, C::Extend),
    (0x0ABEC, 0x0ABED, C::Extend),
    (0x0ABF0, 0x0ABF9, C::Numeric),
    (0x0AC00, 0x0D7A3, C::AHLetter),
    (0x0D7B0, 0x0D7C6, C::AHLetter),
    (0x0D7CB, 0x0D7FB, C::AHLetter),
    (0x0FB00, 0x0FB06, C::AHLetter),
    (0x0FB13, 0x0FB17, C::AHLetter),
    (0x0FB1D, 0x0FB1D, C::HebrewLetter),
    (0x0FB1E, 0x0FB1E, C::Extend),
    (0x0FB1F, 0x0FB28, C::HebrewLetter),
    (0x0FB2A, 0x0FB36, C::HebrewLetter),
    (0x0FB38, 0x0FB3C, C::HebrewLetter),
    (0x0FB3E, 0x0FB3E, C::HebrewLetter),
    (0x0FB40, 0x0FB41, C::HebrewLetter),
    (0x0FB43, 0x0FB44, C::HebrewLetter),
    (0x0FB46, 0x0FB4F, C::HebrewLetter),
    (0x0FB50, 0x0FBB1, C::AHLetter),
    (0x0FBD3, 0x0FD3D, C::AHLetter),
    (0x0FD50, 0x0FD8F, C::AHLetter),
    (0x0FD92, 0x0FDC7, C::AHLetter),
    (0x0FDF0, 0x0FDFB, C::AHLetter),
    (0x0FE00, 0x0FE0F, C::Extend),
    (0x0FE13, 0x0FE13, C::MidLetter),
    (0x0FE20, 0x0FE2F, C::Extend),
    (0x0FE33, 0x0FE34, C::ExtendNumLet),
    (0x0FE4D, 0x0FE4F, C::ExtendNumLet),
    (0x0FE50, 0x0FE50, C::MidNum),
    (0x0FE52, 0x0FE52, C::MidNumLetQ),
    (0x0FE54, 0x0FE54, C::MidNum),
    (0x0FE55, 0x0FE55, C::MidLetter),
    (0x0FE70, 0x0FE74, C::AHLetter),
    (0x0FE76, 0x0FEFC, C::AHLetter),
    (0x0FEFF, 0x0FEFF, C::Format),
    (0x0FF07, 0x0FF07, C::MidNumLetQ),
    (0x0FF0C, 0x0FF0C, C::MidNum),
    (0x0FF0E, 0x0FF0E, C::MidNumLetQ),
    (0x0FF10, 0x0FF19, C::Numeric),
    (0x0FF1A, 0x0FF1A, C::MidLetter),
    (0x0FF1B, 0x0FF1B, C::MidNum),
    (0x0FF21, 0x0FF3A, C::AHLetter),
    (0x0FF3F, 0x0FF3F, C::ExtendNumLet),
    (0x0FF41, 0x0FF5A, C::AHLetter),
    (0x0FF66, 0x0FF9D, C::Katakana),
    (0x0FF9E, 0x0FF9F, C::Extend),
    (0x0FFA0, 0x0FFBE, C::AHLetter),
    (0x0FFC2, 0x0FFC7, C::AHLetter),
    (0x0FFCA, 0x0FFCF, C::AHLetter),
    (0x0FFD2, 0x0FFD7, C::AHLetter),
    (0x0FFDA, 0x0FFDC, C::AHLetter),
    (0x0FFF9, 0x0FFFB, C::Format),
    (0x10000, 0x1000B, C::AHLetter),
    (0x1000D, 0x10026, C::AHLetter),
    (0x10028, 0x1003A, C::AHLetter),
    (0x1003C, 0x1003D, C::AHLetter),
    (0x1003F, 0x1004D, C::AHLetter),
    (0x10050, 0x1005D, C::AHLetter),
    (0x10080, 0x100FA, C::AHLetter),
    (0x10140, 0x10174, C::AHLetter),
    (0x101FD, 0x101FD, C::Extend),
    (0x10280, 0x1029C, C::AHLetter),
    (0x102A0, 0x102D0, C::AHLetter),
    (0x102E0, 0x102E0, C::Extend),
    (0x10300, 0x1031F, C::AHLetter),
    (0x1032D, 0x1034A, C::AHLetter),
    (0x10350, 0x10375, C::AHLetter),
    (0x10376, 0x1037A, C::Extend),
    (0x10380, 0x1039D, C::AHLetter),
    (0x103A0, 0x103C3, C::AHLetter),
    (0x103C8, 0x103CF, C::AHLetter),
    (0x103D1, 0x103D5, C::AHLetter),
    (0x10400, 0x1049D, C::AHLetter),
    (0x104A0, 0x104A9, C::Numeric),
    (0x104B0, 0x104D3, C::AHLetter),
    (0x104D8, 0x104FB, C::AHLetter),
    (0x10500, 0x10527, C::AHLetter),
    (0x10530, 0x10563, C::AHLetter),
    (0x10570, 0x1057A, C::AHLetter),
    (0x1057C, 0x1058A, C::AHLetter),
    (0x1058C, 0x10592, C::AHLetter),
    (0x10594, 0x10595, C::AHLetter),
    (0x10597, 0x105A1, C::AHLetter),
    (0x105A3, 0x105B1, C::AHLetter),
    (0x105B3, 0x105B9, C::AHLetter),
    (0x105BB, 0x105BC, C::AHLetter),
    (0x105C0, 0x105F3, C::AHLetter),
    (0x10600, 0x10736, C::AHLetter),
    (0x10740, 0x10755, C::AHLetter),
    (0x10760, 0x10767, C::AHLetter),
    (0x10780, 0x10785, C::AHLetter),
    (0x10787, 0x107B0, C::AHLetter),
    (0x107B2, 0x107BA, C::AHLetter),
    (0x10800, 0x10805, C::AHLetter),
    (0x10808, 0x10808, C::AHLetter),
    (0x1080A, 0x10835, C::AHLetter),
    (0x10837, 0x10838, C::AHLetter),
    (0x1083C, 0x1083C, C::AHLetter),
    (0x1083F, 0x10855, C::AHLetter),
    (0x10860, 0x10876, C::AHLetter),
    (0x10880, 0x1089E, C::AHLetter),
    (0x108E0, 0x108F2, C::AHLetter),
    (0x108F4, 0x108F5, C::AHLetter),
    (0x10900, 0x10915, C::AHLetter),
    (0x10920, 0x10939, C::AHLetter),
    (0x10940, 0x10959, C::AHLetter),
    (0x10980, 0x109B7, C::AHLetter),
    (0x109BE, 0x109BF, C::AHLetter),
    (0x10A00, 0x10A00, C::AHLetter),
    (0x10A01, 0x10A03, C::Extend),
    (0x10A05, 0x10A06, C::Extend),
    (0x10A0C, 0x10A0F, C::Extend),
    (0x10A10, 0x10A13, C::AHLetter),
    (0x10A15, 0x10A17, C::AHLetter),
    (0x10A19, 0x10A35, C::AHLetter),
    (0x10A38, 0x10A3A, C::Extend),
    (0x10A3F, 0x10A3F, C::Extend),
    (0x10A60, 0x10A7C, C::AHLetter),
    (0x10A80, 0x10A9C, C::AHLetter),
    (0x10AC0, 0x10AC7, C::AHLetter),
    (0x10AC9, 0x10AE4, C::AHLetter),
    (0x10AE5, 0x10AE6, C::Extend),
    (0x10B00, 0x10B35, C::AHLetter),
    (0x10B40, 0x10B55, C::AHLetter),
    (0x10B60, 0x10B72, C::AHLetter),
    (0x10B80, 0x10B91, C::AHLetter),
    (0x10C00, 0x10C48, C::AHLetter),
    (0x10C80, 0x10CB2, C::AHLetter),
    (0x10CC0, 0x10CF2, C::AHLetter),
    (0x10D00, 0x10D23, C::AHLetter),
    (0x10D24, 0x10D27, C::Extend),
    (0x10D30, 0x10D39, C::Numeric),
    (0x10D40, 0x10D49, C::Numeric),
    (0x10D4A, 0x10D65, C::AHLetter),
    (0x10D69, 0x10D6D, C::Extend),
    (0x10D6F, 0x10D85, C::AHLetter),
    (0x10E80, 0x10EA9, C::AHLetter),
    (0x10EAB, 0x10EAC, C::Extend),
    (0x10EB0, 0x10EB1, C::AHLetter),
    (0x10EC2, 0x10EC7, C::AHLetter),
    (0x10EFA, 0x10EFF, C::Extend),
    (0x10F00, 0x10F1C, C::AHLetter),
    (0x10F27, 0x10F27, C::AHLetter),
    (0x10F30, 0x10F45, C::AHLetter),
    (0x10F46, 0x10F50, C::Extend),
    (0x10F70, 0x10F81, C::AHLetter),
    (0x10F82, 0x10F85, C::Extend),
    (0x10FB0, 0x10FC4, C::AHLetter),
    (0x10FE0, 0x10FF6, C::AHLetter),
    (0x11000, 0x11002, C::Extend),
    (0x11003, 0x11037, C::AHLetter),
    (0x11038, 0x11046, C::Extend),
    (0x11066, 0x1106F, C::Numeric),
    (0x11070, 0x11070, C::Extend),
    (0x11071, 0x11072, C::AHLetter),
    (0x11073, 0x11074, C::Extend),
    (0x11075, 0x11075, C::AHLetter),
    (0x1107F, 0x11082, C::Extend),
    (0x11083, 0x110AF, C::AHLetter),
    (0x110B0, 0x110BA, C::Extend),
    (0x110BD, 0x110BD, C::Numeric),
    (0x110C2, 0x110C2, C::Extend),
    (0x110CD, 0x110CD, C::Numeric),
    (0x110D0, 0x110E8, C::AHLetter),
    (0x110F0, 0x110F9, C::Numeric),
    (0x11100, 0x11102, C::Extend),
    (0x11103, 0x11126, C::AHLetter),
    (0x11127, 0x11134, C::Extend),
    (0x11136, 0x1113F, C::Numeric),
    (0x11144, 0x11144, C::AHLetter),
    (0x11145, 0x11146, C::Extend),
    (0x11147, 0x11147, C::AHLetter),
    (0x11150, 0x11172, C::AHLetter),
    (0x11173, 0x11173, C::Extend),
    (0x11176, 0x11176, C::AHLetter),
    (0x11180, 0x11182, C::Extend),
    (0x11183, 0x111B2, C::AHLetter),
    (0x111B3, 0x111C0, C::Extend),
    (0x111C1, 0x111C4, C::AHLetter),
    (0x111C9, 0x111CC, C::Extend),
    (0x111CE, 0x111CF, C::Extend),
    (0x111D0, 0x111D9, C::Numeric),
    (0x111DA, 0x111DA, C::AHLetter),
    (0x111DC, 0x111DC, C::AHLetter),
    (0x11200, 0x11211, C::AHLetter),
    (0x11213, 0x1122B, C::AHLetter),
    (0x1122C, 0x11237, C::Extend),
    (0x1123E, 0x1123E, C::Extend),
    (0x1123F, 0x11240, C::AHLetter),
    (0x11241, 0x11241, C::Extend),
    (0x11280, 0x11286, C::AHLetter),
    (0x11288, 0x11288, C::AHLetter),
    (0x1128A, 0x1128D, C::AHLetter),
    (0x1128F, 0x1129D, C::AHLetter),
    (0x1129F, 0x112A8, C::AHLetter),
    (0x112B0, 0x112DE, C::AHLetter),
    (0x112DF, 0x112EA, C::Extend),
    (0x112F0, 0x112F9, C::Numeric),
    (0x11300, 0x11303, C::Extend),
    (0x11305, 0x1130C, C::AHLetter),
    (0x1130F, 0x11310, C::AHLetter),
    (0x11313, 0x11328, C::AHLetter),
    (0x1132A, 0x11330, C::AHLetter),
    (0x11332, 0x11333, C::AHLetter),
    (0x11335, 0x11339, C::AHLetter),
    (0x1133B, 0x1133C, C::Extend),
    (0x1133D, 0x1133D, C::AHLetter),
    (0x1133E, 0x11344, C::Extend),
    (0x11347, 0x11348, C::Extend),
    (0x1134B, 0x1134D, C::Extend),
    (0x11350, 0x11350, C::AHLetter),
    (0x11357, 0x11357, C::Extend),
    (0x1135D, 0x11361, C::AHLetter),
    (0x11362, 0x11363, C::Extend),
    (0x11366, 0x1136C, C::Extend),
    (0x11370, 0x11374, C::Extend),
    (0x11380, 0x11389, C::AHLetter),
    (0x1138B, 0x1138B, C::AHLetter),
    (0x1138E, 0x1138E, C::AHLetter),
    (0x11390, 0x113B5, C::AHLetter),
    (0x113B7, 0x113B7, C::AHLetter),
    (0x113B8, 0x113C0, C::Extend),
    (0x113C2, 0x113C2, C::Extend),
    (0x113C5, 0x113C5, C::Extend),
    (0x113C7, 0x113CA, C::Extend),
    (0x113CC, 0x113D0, C::Extend),
    (0x113D1, 0x113D1, C::AHLetter),
    (0x113D2, 0x113D2, C::Extend),
    (0x113D3, 0x113D3, C::AHLetter),
    (0x113E1, 0x113E2, C::Extend),
    (0x11400, 0x11434, C::AHLetter),
    (0x11435, 0x11446, C::Extend),
    (0x11447, 0x1144A, C::AHLetter),
    (0x11450, 0x11459, C::Numeric),
    (0x1145E, 0x1145E, C::Extend),
    (0x1145F, 0x11461, C::AHLetter),
    (0x11480, 0x114AF, C::AHLetter),
    (0x114B0, 0x114C3, C::Extend),
    (0x114C4, 0x114C5, C::AHLetter),
    (0x114C7, 0x114C7, C::AHLetter),
    (0x114D0, 0x114D9, C::Numeric),
    (0x11580, 0x115AE, C::AHLetter),
    (0x115AF, 0x115B5, C::Extend),
    (0x115B8, 0x115C0, C::Extend),
    (0x115D8, 0x115DB, C::AHLetter),
    (0x115DC, 0x115DD, C::Extend),
    (0x11600, 0x1162F, C::AHLetter),
    (0x11630, 0x11640, C::Extend),
    (0x11644, 0x11644, C::AHLetter),
    (0x11650, 0x11659, C::Numeric),
    (0x11680, 0x116AA, C::AHLetter),
    (0x116AB, 0x116B7, C::Extend),
    (0x116B8, 0x116B8, C::AHLetter),
    (0x116C0, 0x116C9, C::Numeric),
    (0x116D0, 0x116E3, C::Numeric),
    (0x1171D, 0x1172B, C::Extend),
    (0x11730, 0x11739, C::Numeric),
    (0x11800, 0x1182B, C::AHLetter),
    (0x1182C, 0x1183A, C::Extend),
    (0x118A0, 0x118DF, C::AHLetter),
    (0x118E0, 0x118E9, C::Numeric),
    (0x118FF, 0x11906, C::AHLetter),
    (0x11909, 0x11909, C::AHLetter),
    (0x1190C, 0x11913, C::AHLetter),
    (0x11915, 0x11916, C::AHLetter),
    (0x11918, 0x1192F, C::AHLetter),
    (0x11930, 0x11935, C::Extend),
    (0x11937, 0x11938, C::Extend),
    (0x1193B, 0x1193E, C::Extend),
    (0x1193F, 0x1193F, C::AHLetter),
    (0x11940, 0x11940, C::Extend),
    (0x11941, 0x11941, C::AHLetter),
    (0x11942, 0x11943, C::Extend),
    (0x11950, 0x11959, C::Numeric),
    (0x119A0, 0x119A7, C::AHLetter),
    (0x119AA, 0x119D0, C::AHLetter),
    (0x119D1, 0x119D7, C::Extend),
    (0x119DA, 0x119E0, C::Extend),
    (0x119E1, 0x119E1, C::AHLetter),
    (0x119E3, 0x119E3, C::AHLetter),
    (0x119E4, 0x119E4, C::Extend),
    (0x11A00, 0x11A00, C::AHLetter),
    (0x11A01, 0x11A0A, C::Extend),
    (0x11A0B, 0x11A32, C::AHLetter),
    (0x11A33, 0x11A39, C::Extend),
    (0x11A3A, 0x11A3A, C::AHLetter),
    (0x11A3B, 0x11A3E, C::Extend),
    (0x11A47, 0x11A47, C::Extend),
    (0x11A50, 0x11A50, C::AHLetter),
    (0x11A51, 0x11A5B, C::Extend),
    (0x11A5C, 0x11A89, C::AHLetter),
    (0x11A8A, 0x11A99, C::Extend),
    (0x11A9D, 0x11A9D, C::AHLetter),
    (0x11AB0, 0x11AF8, C::AHLetter),
    (0x11B60, 0x11B67, C::Extend),
    (0x11BC0, 0x11BE0, C::AHLetter),
    (0x11BF0, 0x11BF9, C::Numeric),
    (0x11C00, 0x11C08, C::AHLetter),
    (0x11C0A, 0x11C2E, C::AHLetter),
    (0x11C2F, 0x11C36, C::Extend),
    (0x11C38, 0x11C3F, C::Extend),
    (0x11C40, 0x11C40, C::AHLetter),
    (0x11C50, 0x11C59, C::Numeric),
    (0x11C72, 0x11C8F, C::AHLetter),
    (0x11C92, 0x11CA7, C::Extend),
    (0x11CA9, 0x11CB6, C::Extend),
    (0x11D00, 0x11D06, C::AHLetter),
    (0x11D08, 0x11D09, C::AHLetter),
    (0x11D0B, 0x11D30, C::AHLetter),
    (0x11D31, 0x11D36, C::Extend),
    (0x11D3A, 0x11D3A, C::Extend),
    (0x11D3C, 0x11D3D, C::Extend),
    (0x11D3F, 0x11D45, C::Extend),
    (0x11D46, 0x11D46, C::AHLetter),
    (0x11D47, 0x11D47, C::Extend),
    (0x11D50, 0x11D59, C::Numeric),
    (0x11D60, 0x11D65, C::AHLetter),
    (0x11D67, 0x11D68, C::AHLetter),
    (0x11D6A, 0x11D89, C::AHLetter),
    (0x11D8A, 0x11D8E, C::Extend),
    (0x11D90, 0x11D91, C::Extend),
    (0x11D93, 0x11D97, C::Extend),
    (0x11D98, 0x11D98, C::AHLetter),
    (0x11DA0, 0x11DA9, C::Numeric),
    (0x11DB0, 0x11DDB, C::AHLetter),
    (0x11DE0, 0x11DE9, C::Numeric),
    (0x11EE0, 0x11EF2, C::AHLetter),
    (0x11EF3, 0x11EF6, C::Extend),
    (0x11F00, 0x11F01, C::Extend),
    (0x11F02, 0x11F02, C::AHLetter),
    (0x11F03, 0x11F03, C::Extend),
    (0x11F04, 0x11F10, C::AHLetter),
    (0x11F12, 0x11F33, C::AHLetter),
    (0x11F34, 0x11F3A, C::Extend),
    (0x11F3E, 0x11F42, C::Extend),
    (0x11F50, 0x11F59, C::Numeric),
    (0x11F5A, 0x11F5A, C::Extend),
    (0x11FB0, 0x11FB0, C::AHLetter),
    (0x12000, 0x12399, C::AHLetter),
    (0x12400, 0x1246E, C::AHLetter),
    (0x12480, 0x12543, C::AHLetter),
    (0x12F90, 0x12FF0, C::AHLetter),
    (0x13000, 0x1342F, C::AHLetter),
    (0x13430, 0x1343F, C::Format),
    (0x13440, 0x13440, C::Extend),
    (0x13441, 0x13446, C::AHLetter),
    (0x13447, 0x13455, C::Extend),
    (0x13460, 0x143FA, C::AHLetter),
    (0x14400, 0x14646, C::AHLetter),
    (0x16100, 0x1611D, C::AHLetter),
    (0x1611E, 0x1612F, C::Extend),
    (0x16130, 0x16139, C::Numeric),
    (0x16800, 0x16A38, C::AHLetter),
    (0x16A40, 0x16A5E, C::AHLetter),
    (0x16A60, 0x16A69, C::Numeric),
    (0x16A70, 0x16ABE, C::AHLetter),
    (0x16AC0, 0x16AC9, C::Numeric),
    (0x16AD0, 0x16AED, C::AHLetter),
    (0x16AF0, 0x16AF4, C::Extend),
    (0x16B00, 0x16B2F, C::AHLetter),
    (0x16B30, 0x16B36, C::Extend),
    (0x16B40, 0x16B43, C::AHLetter),
    (0x16B50, 0x16B59, C::Numeric),
    (0x16B63, 0x16B77, C::AHLetter),
    (0x16B7D, 0x16B8F, C::AHLetter),
    (0x16D40, 0x16D6C, C::AHLetter),
    (0x16D70, 0x16D79, C::Numeric),
    (0x16E40, 0x16E7F, C::AHLetter),
    (0x16EA0, 0x16EB8, C::AHLetter),
    (0x16EBB, 0x16ED3, C::AHLetter),
    (0x16F00, 0x16F4A, C::AHLetter),
    (0x16F4F, 0x16F4F, C::Extend),
    (0x16F50, 0x16F50, C::AHLetter),
    (0x16F51, 0x16F87, C::Extend),
    (0x16F8F, 0x16F92, C::Extend),
    (0x16F93, 0x16F9F, C::AHLetter),
    (0x16FE0, 0x16FE1, C::AHLetter),
    (0x16FE3, 0x16FE3, C::AHLetter),
    (0x16FE4, 0x16FE4, C::Extend),
    (0x16FF0, 0x16FF1, C::Extend),
    (0x1AFF0, 0x1AFF3, C::Katakana),
    (0x1AFF5, 0x1AFFB, C::Katakana),
    (0x1AFFD, 0x1AFFE, C::Katakana),
    (0x1B000, 0x1B000, C::Katakana),
    (0x1B120, 0x1B122, C::Katakana),
    (0x1B155, 0x1B155, C::Katakana),
    (0x1B164, 0x1B167, C::Katakana),
    (0x1BC00, 0x1BC6A, C::AHLetter),
    (0x1BC70, 0x1BC7C, C::AHLetter),
    (0x1BC80, 0x1BC88, C::AHLetter),
    (0x1BC90, 0x1BC99, C::AHLetter),
    (0x1BC9D, 0x1BC9E, C::Extend),
    (0x1BCA0, 0x1BCA3, C::Format),
    (0x1CCF0, 0x1CCF9, C::Numeric),
    (0x1CF00, 0x1CF2D, C::Extend),
    (0x1CF30, 0x1CF46, C::Extend),
    (0x1D165, 0x1D169, C::Extend),
    (0x1D16D, 0x1D172, C::Extend),
    (0x1D173, 0x1D17A, C::Format),
    (0x1D17B, 0x1D182, C::Extend),
    (0x1D185, 0x1D18B, C::Extend),
    (0x1D1AA, 0x1D1AD, C::Extend),
    (0x1D242, 0x1D244, C::Extend),
    (0x1D400, 0x1D454, C::AHLetter),
    (0x1D456, 0x1D49C, C::AHLetter),
    (0x1D49E, 0x1D49F, C::AHLetter),
    (0x1D4A2, 0x1D4A2, C::AHLetter),
    (0x1D4A5, 0x1D4A6, C::AHLetter),
    (0x1D4A9, 0x1D4AC, C::AHLetter),
    (0x1D4AE, 0x1D4B9, C::AHLetter),
    (0x1D4BB, 0x1D4BB, C::AHLetter),
    (0x1D4BD, 0x1D4C3, C::AHLetter),
    (0x1D4C5, 0x1D505, C::AHLetter),
    (0x1D507, 0x1D50A, C::AHLetter),
    (0x1D50D, 0x1D514, C::AHLetter),
    (0x1D516, 0x1D51C, C::AHLetter),
    (0x1D51E, 0x1D539, C::AHLetter),
    (0x1D53B, 0x1D53E, C::AHLetter),
    (0x1D540, 0x1D544, C::AHLetter),
    (0x1D546, 0x1D546, C::AHLetter),
    (0x1D54A, 0x1D550, C::AHLetter),
    (0x1D552, 0x1D6A5, C::AHLetter),
    (0x1D6A8, 0x1D6C0, C::AHLetter),
    (0x1D6C2, 0x1D6DA, C::AHLetter),
    (0x1D6DC, 0x1D6FA, C::AHLetter),
    (0x1D6FC, 0x1D714, C::AHLetter),
    (0x1D716, 0x1D734, C::AHLetter),
    (0x1D736, 0x1D74E, C::AHLetter),
    (0x1D750, 0x1D76E, C::AHLetter),
    (0x1D770, 0x1D788, C::AHLetter),
    (0x1D78A, 0x1D7A8, C::AHLetter),
    (0x1D7AA, 0x1D7C2, C::AHLetter),
    (0x1D7C4, 0x1D7CB, C::AHLetter),
    (0x1D7CE, 0x1D7FF, C::Numeric),
    (0x1DA00, 0x1DA36, C::Extend),
    (0x1DA3B, 0x1DA6C, C::Extend),
    (0x1DA75, 0x1DA75, C::Extend),
    (0x1DA84, 0x1DA84, C::Extend),
    (0x1DA9B, 0x1DA9F, C::Extend),
    (0x1DAA1, 0x1DAAF, C::Extend),
    (0x1DF00, 0x1DF1E, C::AHLetter),
    (0x1DF25, 0x1DF2A, C::AHLetter),
    (0x1E000, 0x1E006, C::Extend),
    (0x1E008, 0x1E018, C::Extend),
    (0x1E01B, 0x1E021, C::Extend),
    (0x1E023, 0x1E024, C::Extend),
    (0x1E026, 0x1E02A, C::Extend),
    (0x1E030, 0x1E06D, C::AHLetter),
    (0x1E08F, 0x1E08F, C::Extend),
    (0x1E100, 0x1E12C, C::AHLetter),
    (0x1E130, 0x1E136, C::Extend),
    (0x1E137, 0x1E13D, C::AHLetter),
    (0x1E140, 0x1E149, C::Numeric),
    (0x1E14E, 0x1E14E, C::AHLetter),
    (0x1E290, 0x1E2AD, C::AHLetter),
    (0x1E2AE, 0x1E2AE, C::Extend),
    (0x1E2C0, 0x1E2EB, C::AHLetter),
    (0x1E2EC, 0x1E2EF, C::Extend),
    (0x1E2F0, 0x1E2F9, C::Numeric),
    (0x1E4D0, 0x1E4EB, C::AHLetter),
    (0x1E4EC, 0x1E4EF, C::Extend),
    (0x1E4F0, 0x1E4F9, C::Numeric),
    (0x1E5D0, 0x1E5ED, C::AHLetter),
    (0x1E5EE, 0x1E5EF, C::Extend),
    (0x1E5F0, 0x1E5F0, C::AHLetter),
    (0x1E5F1, 0x1E5FA, C::Numeric),
    (0x1E6C0, 0x1E6DE, C::AHLetter),
    (0x1E6E0, 0x1E6E2, C::AHLetter),
    (0x1E6E3, 0x1E6E3, C::Extend),
    (0x1E6E4, 0x1E6E5, C::AHLetter),
    (0x1E6E6, 0x1E6E6, C::Extend),
    (0x1E6E7, 0x1E6ED, C::AHLetter),
    (0x1E6EE, 0x1E6EF, C::Extend),
    (0x1E6F0, 0x1E6F4, C::AHLetter),
    (0x1E6F5, 0x1E6F5, C::Extend),
    (0x1E6FE, 0x1E6FF, C::AHLetter),
    (0x1E7E0, 0x1E7E6, C::AHLetter),
    (0x1E7E8, 0x1E7EB, C::AHLetter),
    (0x1E7ED, 0x1E7EE, C::AHLetter),
    (0x1E7F0, 0x1E7FE, C::AHLetter),
    (0x1E800, 0x1E8C4, C::AHLetter),
    (0x1E8D0, 0x1E8D6, C::Extend),
    (0x1E900, 0x1E943, C::AHLetter),
    (0x1E944, 0x1E94A, C::Extend),
    (0x1E94B, 0x1E94B, C::AHLetter),
    (0x1E950, 0x1E959, C::Numeric),
    (0x1EE00, 0x1EE03, C::AHLetter),
    (0x1EE05, 0x1EE1F, C::AHLetter),
    (0x1EE21, 0x1EE22, C::AHLetter),
    (0x1EE24, 0x1EE24, C::AHLetter),
    (0x1EE27, 0x1EE27, C::AHLetter),
    (0x1EE29, 0x1EE32, C::AHLetter),
    (0x1EE34, 0x1EE37, C::AHLetter),
    (0x1EE39, 0x1EE39, C::AHLetter),
    (0x1EE3B, 0x1EE3B, C::AHLetter),
    (0x1EE42, 0x1EE42, C::AHLetter),
    (0x1EE47, 0x1EE47, C::AHLetter),
    (0x1EE49, 0x1EE49, C::AHLetter),
    (0x1EE4B, 0x1EE4B, C::AHLetter),
    (0x1EE4D, 0x1EE4F, C::AHLetter),
    (0x1EE51, 0x1EE52, C::AHLetter),
    (0x1EE54, 0x1EE54, C::AHLetter),
    (0x1EE57, 0x1EE57, C::AHLetter),
    (0x1EE59, 0x1EE59, C::AHLetter),
    (0x1EE5B, 0x1EE5B, C::AHLetter),
    (0x1EE5D, 0x1EE5D, C::AHLetter),
    (0x1EE5F, 0x1EE5F, C::AHLetter),
    (0x1EE61, 0x1EE62, C::AHLetter),
    (0x1EE64, 0x1EE64, C::AHLetter),
    (0x1EE67, 0x1EE6A, C::AHLetter),
    (0x1EE6C, 0x1EE72, C::AHLetter),
    (0x1EE74, 0x1EE77, C::AHLetter),
    (0x1EE79, 0x1EE7C, C::AHLetter),
    (0x1EE7E, 0x1EE7E, C::AHLetter),
    (0x1EE80, 0x1EE89, C::AHLetter),
    (0x1EE8B, 0x1EE9B, C::AHLetter),
    (0x1EEA1, 0x1EEA3, C::AHLetter),
    (0x1EEA5, 0x1EEA9, C::AHLetter),
    (0x1EEAB, 0x1EEBB, C::AHLetter),
    (0x1F004, 0x1F004, C::GlueAfterZWJ),
    (0x1F02C, 0x1F02F, C::GlueAfterZWJ),
    (0x1F094, 0x1F09F, C::GlueAfterZWJ),
    (0x1F0AF, 0x1F0B0, C::GlueAfterZWJ),
    (0x1F0C0, 0x1F0C0, C::GlueAfterZWJ),
    (0x1F0CF, 0x1F0D0, C::GlueAfterZWJ),
    (0x1F0F6, 0x1F0FF, C::GlueAfterZWJ),
    (0x1F130, 0x1F149, C::AHLetter),
    (0x1F150, 0x1F169, C::AHLetter),
    (0x1F170, 0x1F189, C::AHLetter),
    (0x1F18E, 0x1F18E, C::GlueAfterZWJ),
    (0x1F191, 0x1F19A, C::GlueAfterZWJ),
    (0x1F1AE, 0x1F1E5, C::GlueAfterZWJ),
    (0x1F1E6, 0x1F1FF, C::RegionalIndicator),
    (0x1F201, 0x1F20F, C::GlueAfterZWJ),
    (0x1F21A, 0x1F21A, C::GlueAfterZWJ),
    (0x1F22F, 0x1F22F, C::GlueAfterZWJ),
    (0x1F232, 0x1F23A, C::GlueAfterZWJ),
    (0x1F23C, 0x1F23F, C::GlueAfterZWJ),
    (0x1F249, 0x1F25F, C::GlueAfterZWJ),
    (0x1F266, 0x1F321, C::GlueAfterZWJ),
    (0x1F324, 0x1F384, C::GlueAfterZWJ),
    (0x1F385, 0x1F385, C::EBase),
    (0x1F386, 0x1F393, C::GlueAfterZWJ),
    (0x1F396, 0x1F397, C::GlueAfterZWJ),
    (0x1F399, 0x1F39B, C::GlueAfterZWJ),
    (0x1F39E, 0x1F3C1, C::GlueAfterZWJ),
    (0x1F3C2, 0x1F3C4, C::EBase),
    (0x1F3C5, 0x1F3C6, C::GlueAfterZWJ),
    (0x1F3C7, 0x1F3C7, C::EBase),
    (0x1F3C8, 0x1F3C9, C::GlueAfterZWJ),
    (0x1F3CA, 0x1F3CC, C::EBase),
    (0x1F3CD, 0x1F3F0, C::GlueAfterZWJ),
    (0x1F3F3, 0x1F3F5, C::GlueAfterZWJ),
    (0x1F3F7, 0x1F3FA, C::GlueAfterZWJ),
    (0x1F3FB, 0x1F3FF, C::EModifier),
    (0x1F400, 0x1F441, C::GlueAfterZWJ),
    (0x1F442, 0x1F443, C::EBase),
    (0x1F444, 0x1F445, C::GlueAfterZWJ),
    (0x1F446, 0x1F450, C::EBase),
    (0x1F451, 0x1F465, C::GlueAfterZWJ),
    (0x1F466, 0x1F469, C::EBaseGAZ),
    (0x1F46A, 0x1F478, C::EBase),
    (0x1F479, 0x1F47B, C::GlueAfterZWJ),
    (0x1F47C, 0x1F47C, C::EBase),
    (0x1F47D, 0x1F480, C::GlueAfterZWJ),
    (0x1F481, 0x1F483, C::EBase),
    (0x1F484, 0x1F484, C::GlueAfterZWJ),
    (0x1F485, 0x1F487, C::EBase),
    (0x1F488, 0x1F48E, C::GlueAfterZWJ),
    (0x1F48F, 0x1F48F, C::EBase),
    (0x1F490, 0x1F490, C::GlueAfterZWJ),
    (0x1F491, 0x1F491, C::EBase),
    (0x1F492, 0x1F4A9, C::GlueAfterZWJ),
    (0x1F4AA, 0x1F4AA, C::EBase),
    (0x1F4AB, 0x1F4FD, C::GlueAfterZWJ),
    (0x1F4FF, 0x1F53D, C::GlueAfterZWJ),
    (0x1F549, 0x1F54E, C::GlueAfterZWJ),
    (0x1F550, 0x1F567, C::GlueAfterZWJ),
    (0x1F56F, 0x1F570, C::GlueAfterZWJ),
    (0x1F573, 0x1F573, C::GlueAfterZWJ),
    (0x1F574, 0x1F575, C::EBase),
    (0x1F576, 0x1F579, C::GlueAfterZWJ),
    (0x1F57A, 0x1F57A, C::EBase),
    (0x1F587, 0x1F587, C::GlueAfterZWJ),
    (0x1F58A, 0x1F58D, C::GlueAfterZWJ),
    (0x1F590, 0x1F590, C::EBase),
    (0x1F595, 0x1F596, C::EBase),
    (0x1F5A4, 0x1F5A5, C::GlueAfterZWJ),
    (0x1F5A8, 0x1F5A8, C::GlueAfterZWJ),
    (0x1F5B1, 0x1F5B2, C::GlueAfterZWJ),
    (0x1F5BC, 0x1F5BC, C::GlueAfterZWJ),
    (0x1F5C2, 0x1F5C4, C::GlueAfterZWJ),
    (0x1F5D1, 0x1F5D3, C::GlueAfterZWJ),
    (0x1F5DC, 0x1F5DE, C::GlueAfterZWJ),
    (0x1F5E1, 0x1F5E1, C::GlueAfterZWJ),
    (0x1F5E3, 0x1F5E3, C::GlueAfterZWJ),
    (0x1F5E8, 0x1F5E8, C::GlueAfterZWJ),
    (0x1F5EF, 0x1F5EF, C::GlueAfterZWJ),
    (0x1F5F3, 0x1F5F3, C::GlueAfterZWJ),
    (0x1F5FA, 0x1F644, C::GlueAfterZWJ),
    (0x1F645, 0x1F647, C::EBase),
    (0x1F648, 0x1F64A, C::GlueAfterZWJ),
    (0x1F64B, 0x1F64F, C::EBase),
    (0x1F680, 0x1F6A2, C::GlueAfterZWJ),
    (0x1F6A3, 0x1F6A3, C::EBase),
    (0x1F6A4, 0x1F6B3, C::GlueAfterZWJ),
    (0x1F6B4, 0x1F6B6, C::EBase),
    (0x1F6B7, 0x1F6BF, C::GlueAfterZWJ),
    (0x1F6C0, 0x1F6C0, C::EBase),
    (0x1F6C1, 0x1F6C5, C::GlueAfterZWJ),
    (0x1F6CB, 0x1F6CB, C::GlueAfterZWJ),
    (0x1F6CC, 0x1F6CC, C::EBase),
    (0x1F6CD, 0x1F6D2, C::GlueAfterZWJ),
    (0x1F6D5, 0x1F6E5, C::GlueAfterZWJ),
    (0x1F6E9, 0x1F6E9, C::GlueAfterZWJ),
    (0x1F6EB, 0x1F6F0, C::GlueAfterZWJ),
    (0x1F6F3, 0x1F6FF, C::GlueAfterZWJ),
    (0x1F7DA, 0x1F7FF, C::GlueAfterZWJ),
    (0x1F80C, 0x1F80F, C::GlueAfterZWJ),
    (0x1F848, 0x1F84F, C::GlueAfterZWJ),
    (0x1F85A, 0x1F85F, C::GlueAfterZWJ),
    (0x1F888, 0x1F88F, C::GlueAfterZWJ),
    (0x1F8AE, 0x1F8AF, C::GlueAfterZWJ),
    (0x1F8BC, 0x1F8BF, C::GlueAfterZWJ),
    (0x1F8C2, 0x1F8CF, C::GlueAfterZWJ),
    (0x1F8D9, 0x1F8FF, C::GlueAfterZWJ),
    (0x1F90C, 0x1F90C, C::EBase),
    (0x1F90D, 0x1F90E, C::GlueAfterZWJ),
    (0x1F90F, 0x1F90F, C::EBase),
    (0x1F910, 0x1F917, C::GlueAfterZWJ),
    (0x1F918, 0x1F91F, C::EBase),
    (0x1F920, 0x1F925, C::GlueAfterZWJ),
    (0x1F926, 0x1F926, C::EBase),
    (0x1F927, 0x1F92F, C::GlueAfterZWJ),
    (0x1F930, 0x1F939, C::EBase),
    (0x1F93A, 0x1F93A, C::GlueAfterZWJ),
    (0x1F93C, 0x1F93E, C::EBase),
    (0x1F93F, 0x1F945, C::GlueAfterZWJ),
    (0x1F947, 0x1F976, C::GlueAfterZWJ),
    (0x1F977, 0x1F977, C::EBase),
    (0x1F978, 0x1F9B4, C::GlueAfterZWJ),
    (0x1F9B5, 0x1F9B6, C::EBase),
    (0x1F9B7, 0x1F9B7, C::GlueAfterZWJ),
    (0x1F9B8, 0x1F9B9, C::EBase),
    (0x1F9BA, 0x1F9BA, C::GlueAfterZWJ),
    (0x1F9BB, 0x1F9BB, C::EBase),
    (0x1F9BC, 0x1F9CC, C::GlueAfterZWJ),
    (0x1F9CD, 0x1F9CF, C::EBase),
    (0x1F9D0, 0x1F9D0, C::GlueAfterZWJ),
    (0x1F9D1, 0x1F9DD, C::EBase),
    (0x1F9DE, 0x1F9FF, C::GlueAfterZWJ),
    (0x1FA58, 0x1FA5F, C::GlueAfterZWJ),
    (0x1FA6E, 0x1FAC2, C::GlueAfterZWJ),
    (0x1FAC3, 0x1FAC5, C::EBase),
    (0x1FAC6, 0x1FAEF, C::GlueAfterZWJ),
    (0x1FAF0, 0x1FAF8, C::EBase),
    (0x1FAF9, 0x1FAFF, C::GlueAfterZWJ),
    (0x1FBF0, 0x1FBF9, C::Numeric),
    (0x1FC00, 0x1FFFD, C::GlueAfterZWJ),
    (0xE0001, 0xE0001, C::Format),
    (0xE0020, 0xE007F, C::Extend),
    (0xE0100, 0xE01EF, C::Extend),
];

/// General category `P` (all punctuation subcategories).
#[rustfmt::skip]
pub(crate) static PUNCTUATION_RANGES: &[(u32, u32)] = &[
    (0x00021, 0x00023), (0x00025, 0x0002A), (0x0002C, 0x0002F), (0x0003A, 0x0003B),
    (0x0003F, 0x00040), (0x0005B, 0x0005D), (0x0005F, 0x0005F), (0x0007B, 0x0007B),
    (0x0007D, 0x0007D), (0x000A1, 0x000A1), (0x000A7, 0x000A7), (0x000AB, 0x000AB),
    (0x000B6, 0x000B7), (0x000BB, 0x000BB), (0x000BF, 0x000BF), (0x0037E, 0x0037E),
    (0x00387, 0x00387), (0x0055A, 0x0055F), (0x00589, 0x0058A), (0x005BE, 0x005BE),
    (0x005C0, 0x005C0), (0x005C3, 0x005C3), (0x005C6, 0x005C6), (0x005F3, 0x005F4),
    (0x00609, 0x0060A), (0x0060C, 0x0060D), (0x0061B, 0x0061B), (0x0061D, 0x0061F),
    (0x0066A, 0x0066D), (0x006D4, 0x006D4), (0x00700, 0x0070D), (0x007F7, 0x007F9),
    (0x00830, 0x0083E), (0x0085E, 0x0085E), (0x00964, 0x00965), (0x00970, 0x00970),
    (0x009FD, 0x009FD), (0x00A76, 0x00A76), (0x00AF0, 0x00AF0), (0x00C77, 0x00C77),
    (0x00C84, 0x00C84), (0x00DF4, 0x00DF4), (0x00E4F, 0x00E4F), (0x00E5A, 0x00E5B),
    (0x00F04, 0x00F12), (0x00F14, 0x00F14), (0x00F3A, 0x00F3D), (0x00F85, 0x00F85),
    (0x00FD0, 0x00FD4), (0x00FD9, 0x00FDA), (0x0104A, 0x0104F), (0x010FB, 0x010FB),
    (0x01360, 0x01368), (0x01400, 0x01400), (0x0166E, 0x0166E), (0x0169B, 0x0169C),
    (0x016EB, 0x016ED), (0x01735, 0x01736), (0x017D4, 0x017D6), (0x017D8, 0x017DA),
    (0x01800, 0x0180A), (0x01944, 0x01945), (0x01A1E, 0x01A1F), (0x01AA0, 0x01AA6),
    (0x01AA8, 0x01AAD), (0x01B4E, 0x01B4F), (0x01B5A, 0x01B60), (0x01B7D, 0x01B7F),
    (0x01BFC, 0x01BFF), (0x01C3B, 0x01C3F), (0x01C7E, 0x01C7F), (0x01CC0, 0x01CC7),
    (0x01CD3, 0x01CD3), (0x02010, 0x02027), (0x02030, 0x02043), (0x02045, 0x02051),
    (0x02053, 0x0205E), (0x0207D, 0x0207E), (0x0208D, 0x0208E), (0x02308, 0x0230B),
    (0x02329, 0x0232A), (0x02768, 0x02775), (0x027C5, 0x027C6), (0x027E6, 0x027EF),
    (0x02983, 0x02998), (0x029D8, 0x029DB), (0x029FC, 0x029FD), (0x02CF9, 0x02CFC),
    (0x02CFE, 0x02CFF), (0x02D70, 0x02D70), (0x02E00, 0x02E2E), (0x02E30, 0x02E4F),
    (0x02E52, 0x02E5D), (0x03001, 0x03003), (0x03008, 0x03011), (0x03014, 0x0301F),
    (0x03030, 0x03030), (0x0303D, 0x0303D), (0x030A0, 0x030A0), (0x030FB, 0x030FB),
    (0x0A4FE, 0x0A4FF), (0x0A60D, 0x0A60F), (0x0A673, 0x0A673), (0x0A67E, 0x0A67E),
    (0x0A6F2, 0x0A6F7), (0x0A874, 0x0A877), (0x0A8CE, 0x0A8CF), (0x0A8F8, 0x0A8FA),
    (0x0A8FC, 0x0A8FC), (0x0A92E, 0x0A92F), (0x0A95F, 0x0A95F), (0x0A9C1, 0x0A9CD),
    (0x0A9DE, 0x0A9DF), (0x0AA5C, 0x0AA5F), (0x0AADE, 0x0AADF), (0x0AAF0, 0x0AAF1),
    (0x0ABEB, 0x0ABEB), (0x0FD3E, 0x0FD3F), (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52),
    (0x0FE54, 0x0FE61), (0x0FE63, 0x0FE63), (0x0FE68, 0x0FE68), (0x0FE6A, 0x0FE6B),
    (0x0FF01, 0x0FF03), (0x0FF05, 0x0FF0A), (0x0FF0C, 0x0FF0F), (0x0FF1A, 0x0FF1B),
    (0x0FF1F, 0x0FF20), (0x0FF3B, 0x0FF3D), (0x0FF3F, 0x0FF3F), (0x0FF5B, 0x0FF5B),
    (0x0FF5D, 0x0FF5D), (0x0FF5F, 0x0FF65), (0x10100, 0x10102), (0x1039F, 0x1039F),
    (0x103D0, 0x103D0), (0x1056F, 0x1056F), (0x10857, 0x10857), (0x1091F, 0x1091F),
    (0x1093F, 0x1093F), (0x10A50, 0x10A58), (0x10A7F, 0x10A7F), (0x10AF0, 0x10AF6),
    (0x10B39, 0x10B3F), (0x10B99, 0x10B9C), (0x10D6E, 0x10D6E), (0x10EAD, 0x10EAD),
    (0x10ED0, 0x10ED0), (0x10F55, 0x10F59), (0x10F86, 0x10F89), (0x11047, 0x1104D),
    (0x110BB, 0x110BC), (0x110BE, 0x110C1), (0x11140, 0x11143), (0x11174, 0x11175),
    (0x111C5, 0x111C8), (0x111CD, 0x111CD), (0x111DB, 0x111DB), (0x111DD, 0x111DF),
    (0x11238, 0x1123D), (0x112A9, 0x112A9), (0x113D4, 0x113D5), (0x113D7, 0x113D8),
    (0x1144B, 0x1144F), (0x1145A, 0x1145B), (0x1145D, 0x1145D), (0x114C6, 0x114C6),
    (0x115C1, 0x115D7), (0x11641, 0x11643), (0x11660, 0x1166C), (0x116B9, 0x116B9),
    (0x1173C, 0x1173E), (0x1183B, 0x1183B), (0x11944, 0x11946), (0x119E2, 0x119E2),
    (0x11A3F, 0x11A46), (0x11A9A, 0x11A9C), (0x11A9E, 0x11AA2), (0x11B00, 0x11B09),
    (0x11BE1, 0x11BE1), (0x11C41, 0x11C45), (0x11C70, 0x11C71), (0x11EF7, 0x11EF8),
    (0x11F43, 0x11F4F), (0x11FFF, 0x11FFF), (0x12470, 0x12474), (0x12FF1, 0x12FF2),
    (0x16A6E, 0x16A6F), (0x16AF5, 0x16AF5), (0x16B37, 0x16B3B), (0x16B44, 0x16B44),
    (0x16D6D, 0x16D6F), (0x16E97, 0x16E9A), (0x16FE2, 0x16FE2), (0x1BC9F, 0x1BC9F),
    (0x1DA87, 0x1DA8B), (0x1E5FF, 0x1E5FF), (0x1E95E, 0x1E95F),
];
