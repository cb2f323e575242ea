// Recursion cap for nested compounds/lists, to avoid stack exhaustion on
// hostile input.
pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
    LittleVarint,
}

impl Endian {
    pub(crate) fn little_endian(self) -> bool {
        !matches!(self, Endian::Big)
    }

    pub(crate) fn varint(self) -> bool {
        matches!(self, Endian::LittleVarint)
    }

    // Order endian auto-detection tries candidates in.
    pub(crate) const DETECTION_ORDER: [Endian; 3] =
        [Endian::Big, Endian::Little, Endian::LittleVarint];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    ZlibDeflate,
    RawDeflate,
}

// `Auto` triggers detection (try present then absent); `Exact` additionally
// requires the on-wire name to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootNameHint {
    Auto,
    Present,
    Absent,
    Exact(String),
}

// Fields left `None`/`Auto` are resolved by speculative re-entry, in a
// fixed order, by the format driver.
#[derive(Debug, Clone)]
pub struct Hints {
    pub root_name: RootNameHint,
    pub endian: Option<Endian>,
    pub compression: Option<Compression>,
    pub bedrock_level: Option<bool>,
    pub strict: bool,
    pub max_depth: usize,
}

impl Default for Hints {
    fn default() -> Self {
        Self {
            root_name: RootNameHint::Auto,
            endian: None,
            compression: None,
            bedrock_level: None,
            strict: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Hints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_name(mut self, hint: RootNameHint) -> Self {
        self.root_name = hint;
        self
    }

    pub fn endian(mut self, endian: Endian) -> Self {
        self.endian = Some(endian);
        self
    }

    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn bedrock_level(mut self, present: bool) -> Self {
        self.bedrock_level = Some(present);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framing {
    pub root_name: Option<String>,
    pub endian: Endian,
    pub compression: Compression,
    pub bedrock_level: bool,
}
