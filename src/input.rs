//! Accepts an owned buffer or a borrowed slice and materialises it to one
//! concrete owned buffer before decoding starts, since decompression (when
//! it runs) replaces the buffer outright and nothing downstream may keep
//! borrowing the original.

pub enum Input<'a> {
    Owned(Vec<u8>),
    Borrowed(&'a [u8]),
}

impl<'a> Input<'a> {
    pub fn materialize(self) -> Vec<u8> {
        match self {
            Input::Owned(bytes) => bytes,
            Input::Borrowed(bytes) => bytes.to_vec(),
        }
    }
}

impl From<Vec<u8>> for Input<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Owned(bytes)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Borrowed(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Input::Borrowed(bytes.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Input::Borrowed(bytes.as_slice())
    }
}
