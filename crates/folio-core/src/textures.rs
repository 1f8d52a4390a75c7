//! Texture lookup contract consumed by the render side.
//!
//! The core never owns GPU resources; it only names which artwork indices are
//! being blended and lets the host resolve them.

/// One renderable texture per artwork index.
///
/// `get` returns `None` while a texture is still loading; callers draw that
/// slot as transparent and look again next tick.
pub trait TextureSet {
    type Handle;

    fn get(&self, index: usize) -> Option<&Self::Handle>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H> TextureSet for Vec<Option<H>> {
    type Handle = H;

    fn get(&self, index: usize) -> Option<&H> {
        self.as_slice().get(index).and_then(Option::as_ref)
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }
}

/// The two artwork textures blended by the cross-fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TexturePairing {
    pub from: usize,
    pub to: usize,
}

impl TexturePairing {
    /// The no-op blend shown between transitions.
    pub fn settled(index: usize) -> Self {
        Self {
            from: index,
            to: index,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.from == self.to
    }

    pub fn resolve<'a, T: TextureSet>(
        &self,
        set: &'a T,
    ) -> (Option<&'a T::Handle>, Option<&'a T::Handle>) {
        (set.get(self.from), set.get(self.to))
    }
}
