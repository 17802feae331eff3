pub mod banking;
pub mod bootstrap;
pub mod city_founding;
pub mod emergency;
pub mod garrison;
pub mod movement;
pub mod research;
pub mod reserve;
pub mod surplus;
pub mod worker_production;

pub use banking::BankingPhase;
pub use bootstrap::BootstrapWorkerPhase;
pub use city_founding::CityFoundingPhase;
pub use emergency::EmergencyDefensePhase;
pub use garrison::GarrisonPhase;
pub use movement::{ArmyMovementPhase, WorkerMovementPhase};
pub use research::ResearchPhase;
pub use reserve::ReservePhase;
pub use surplus::SurplusArmyPhase;
pub use worker_production::WorkerProductionPhase;

use crate::phase::TurnPhase;

/// Build the default phase stack (11 phases).
///
/// 1. ResearchPhase -- trade into offense/defense
/// 2. BootstrapWorkerPhase -- first worker for a lone city
/// 3. EmergencyDefensePhase -- counter adjacent enemy armies
/// 4. ReservePhase -- hold back part of a large pool
/// 5. GarrisonPhase -- one army per empty city
/// 6. WorkerProductionPhase -- workers while cities are under-loaded
/// 7. CityFoundingPhase -- one new city
/// 8. BankingPhase -- halve unspent production if no city was founded
/// 9. SurplusArmyPhase -- armies at the most pressured city
/// 10. WorkerMovementPhase
/// 11. ArmyMovementPhase
pub fn default_phases() -> Vec<Box<dyn TurnPhase>> {
    vec![
        Box::new(ResearchPhase),
        Box::new(BootstrapWorkerPhase),
        Box::new(EmergencyDefensePhase),
        Box::new(ReservePhase),
        Box::new(GarrisonPhase),
        Box::new(WorkerProductionPhase),
        Box::new(CityFoundingPhase),
        Box::new(BankingPhase),
        Box::new(SurplusArmyPhase),
        Box::new(WorkerMovementPhase),
        Box::new(ArmyMovementPhase),
    ]
}
