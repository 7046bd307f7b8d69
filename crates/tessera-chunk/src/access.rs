use tessera_blocks::{BlockCatalog, BlockId};

/// Read-only world view across chunk borders. Missing chunks read as air and darkness.
pub trait BlockAccess {
    fn catalog(&self) -> &BlockCatalog;

    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> BlockId;

    /// Brightest of the two light layers; 0 where nothing is loaded.
    fn light_at(&self, _wx: i32, _wy: i32, _wz: i32) -> u8 {
        0
    }
}

impl<T: BlockAccess + ?Sized> BlockAccess for &T {
    fn catalog(&self) -> &BlockCatalog {
        (**self).catalog()
    }

    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> BlockId {
        (**self).block_at(wx, wy, wz)
    }

    fn light_at(&self, wx: i32, wy: i32, wz: i32) -> u8 {
        (**self).light_at(wx, wy, wz)
    }
}
