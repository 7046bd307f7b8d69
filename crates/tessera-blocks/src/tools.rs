use serde::Deserialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    Pickaxe,
    Axe,
    Shovel,
    Hand,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ToolId {
    WoodPickaxe,
    StonePickaxe,
    IronPickaxe,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToolDef {
    pub id: ToolId,
    pub key: &'static str,
    pub name: &'static str,
    pub tool_type: ToolType,
    pub tier: u8,
    pub efficiency: f32,
    pub durability: u32,
}

pub static TOOL_DEFS: [ToolDef; 3] = [
    ToolDef {
        id: ToolId::WoodPickaxe,
        key: "wood_pickaxe",
        name: "Wood Pickaxe",
        tool_type: ToolType::Pickaxe,
        tier: 1,
        efficiency: 1.6,
        durability: 60,
    },
    ToolDef {
        id: ToolId::StonePickaxe,
        key: "stone_pickaxe",
        name: "Stone Pickaxe",
        tool_type: ToolType::Pickaxe,
        tier: 2,
        efficiency: 2.1,
        durability: 90,
    },
    ToolDef {
        id: ToolId::IronPickaxe,
        key: "iron_pickaxe",
        name: "Iron Pickaxe",
        tool_type: ToolType::Pickaxe,
        tier: 3,
        efficiency: 2.8,
        durability: 150,
    },
];

impl ToolId {
    pub const ALL: [ToolId; 3] = [ToolId::WoodPickaxe, ToolId::StonePickaxe, ToolId::IronPickaxe];

    #[inline]
    pub fn def(self) -> &'static ToolDef {
        &TOOL_DEFS[self as usize]
    }

    #[inline]
    pub fn key(self) -> &'static str {
        self.def().key
    }

    pub fn from_key(key: &str) -> Option<ToolId> {
        TOOL_DEFS.iter().find(|d| d.key == key).map(|d| d.id)
    }
}

/// A stack of identical tools; only the top one carries wear.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ToolStack {
    pub tool: ToolId,
    pub count: u32,
    pub durability: u32,
}

impl ToolStack {
    pub fn new(tool: ToolId, count: u32) -> Self {
        Self {
            tool,
            count,
            durability: tool.def().durability.max(1),
        }
    }

    /// Wears the top tool by `amount` (at least 1). Returns `None` once the last tool breaks.
    pub fn apply_damage(self, amount: u32) -> Option<ToolStack> {
        if self.count == 0 {
            return None;
        }
        let max = self.tool.def().durability.max(1);
        let current = self.durability.min(max);
        let next = current.saturating_sub(amount.max(1));
        if next > 0 {
            return Some(ToolStack {
                durability: next,
                ..self
            });
        }
        if self.count <= 1 {
            return None;
        }
        Some(ToolStack {
            tool: self.tool,
            count: self.count - 1,
            durability: max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_table() {
        for t in ToolId::ALL {
            assert_eq!(ToolId::from_key(t.key()), Some(t));
            assert_eq!(t.def().id, t);
        }
        assert_eq!(ToolId::from_key("diamond_pickaxe"), None);
    }

    #[test]
    fn damage_wears_then_consumes_stack() {
        let s = ToolStack::new(ToolId::WoodPickaxe, 2);
        assert_eq!(s.durability, 60);
        let s = s.apply_damage(0).unwrap();
        assert_eq!(s.durability, 59);
        let s = s.apply_damage(100).unwrap();
        assert_eq!((s.count, s.durability), (1, 60));
        assert_eq!(s.apply_damage(60), None);
    }
}
