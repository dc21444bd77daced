use std::fmt;

/// Main error type for the turf-war combat engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error related to equipment catalog lookup
    Equipment(EquipmentError),
    /// Error related to invalid battle state
    BattleState(BattleStateError),
    /// Error related to invalid combatant actions
    Action(ActionError),
    /// Error related to the active-battle registry
    Registry(RegistryError),
    /// Error related to gang-war bookkeeping
    War(WarError),
    /// Error related to the persisted ledger
    Store(StoreError),
}

/// Errors related to equipment catalog lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipmentError {
    /// The given id names no weapon or clothing item in the catalog
    UnknownId(String),
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleStateError {
    /// The battle has already reached a terminal result
    AlreadyEnded,
}

/// Errors related to combatant actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The acting combatant is not the one whose turn it is
    NotYourTurn(String),
    /// The actor id belongs to neither combatant in this battle
    UnknownCombatant(String),
    /// The move name does not match any known move kind
    UnknownMove(String),
}

/// Errors related to the active-battle registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A live battle already exists for this pair of combatants
    DuplicateBattle,
    /// No live battle exists for this key
    NoSuchBattle,
}

/// Errors related to gang-war bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarError {
    /// The member has no battles left in this war
    AllowanceExhausted(String),
    /// The war has already completed; allowances are frozen
    AlreadyCompleted,
    /// The war id names no persisted war record
    UnknownWar(String),
    /// A gang-war battle was settled without its war context
    MissingContext,
}

/// Errors related to the persisted ledger store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Underlying I/O failed while loading or saving
    Io(String),
    /// Persisted data could not be serialized or deserialized
    Serde(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Equipment(err) => write!(f, "Equipment error: {}", err),
            EngineError::BattleState(err) => write!(f, "Battle state error: {}", err),
            EngineError::Action(err) => write!(f, "Action error: {}", err),
            EngineError::Registry(err) => write!(f, "Registry error: {}", err),
            EngineError::War(err) => write!(f, "War error: {}", err),
            EngineError::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl fmt::Display for EquipmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentError::UnknownId(id) => write!(f, "Unknown equipment id: {}", id),
        }
    }
}

impl fmt::Display for BattleStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleStateError::AlreadyEnded => write!(f, "This battle is already over"),
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::NotYourTurn(id) => write!(f, "It is not {}'s turn", id),
            ActionError::UnknownCombatant(id) => {
                write!(f, "Combatant {} is not part of this battle", id)
            }
            ActionError::UnknownMove(name) => write!(f, "Unknown move: {}", name),
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateBattle => {
                write!(f, "These combatants already have a battle in progress")
            }
            RegistryError::NoSuchBattle => write!(f, "No active battle for this pair"),
        }
    }
}

impl fmt::Display for WarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarError::AllowanceExhausted(id) => {
                write!(f, "Member {} has no war battles left", id)
            }
            WarError::AlreadyCompleted => write!(f, "This war has already been decided"),
            WarError::UnknownWar(id) => write!(f, "No war record exists for id: {}", id),
            WarError::MissingContext => {
                write!(f, "A gang-war battle needs its war context to settle")
            }
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(details) => write!(f, "Store I/O failure: {}", details),
            StoreError::Serde(details) => write!(f, "Store data failure: {}", details),
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for EquipmentError {}
impl std::error::Error for BattleStateError {}
impl std::error::Error for ActionError {}
impl std::error::Error for RegistryError {}
impl std::error::Error for WarError {}
impl std::error::Error for StoreError {}

impl From<EquipmentError> for EngineError {
    fn from(err: EquipmentError) -> Self {
        EngineError::Equipment(err)
    }
}

impl From<BattleStateError> for EngineError {
    fn from(err: BattleStateError) -> Self {
        EngineError::BattleState(err)
    }
}

impl From<ActionError> for EngineError {
    fn from(err: ActionError) -> Self {
        EngineError::Action(err)
    }
}

impl From<RegistryError> for EngineError {
    fn from(err: RegistryError) -> Self {
        EngineError::Registry(err)
    }
}

impl From<WarError> for EngineError {
    fn from(err: WarError) -> Self {
        EngineError::War(err)
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        EngineError::Store(err)
    }
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using EquipmentError
pub type EquipmentResult<T> = Result<T, EquipmentError>;

/// Type alias for Results using StoreError
pub type StoreResult<T> = Result<T, StoreError>;
