//! What happens when each kind of event fires
//!
//! | Event           | Worker goes to                  | Patient goes to                        |
//! |-----------------|---------------------------------|----------------------------------------|
//! | ArrivalEnd      | -                               | registration; next arrival scheduled   |
//! | RegisterEnd     | registration queue              | consultation if EMERGENCY, else screening |
//! | ScreeningEnd    | screening queue, then exams     | consultation                           |
//! | ConsultationEnd | consultation queue              | exams if needed, else discharged       |
//! | ExamsEnd        | exams queue, then screening     | discharged                             |

use super::{Event, EventKind};
use crate::simulation::{Simulation, SimulationError, SimulationResult};
use crate::types::{Priority, Stage, WorkerId};

impl Event {
    /// Apply this event's transition to the simulation state
    pub fn process(&self, simulation: &mut Simulation) -> SimulationResult<()> {
        if let Some(worker) = self.kind.worker() {
            self.ensure_serving(simulation, worker)?;
        }

        match self.kind {
            EventKind::ArrivalEnd => {
                simulation.admit_or_enqueue(self.patient, Stage::Registration)?;
                let next = simulation.new_patient();
                simulation.schedule_arrival(next)?;
            }
            EventKind::RegisterEnd { attendant } => {
                simulation.release_or_rebind(attendant, &[Stage::Registration])?;
                let next = if simulation.patient(self.patient)?.priority == Priority::Emergency {
                    Stage::Consultation
                } else {
                    Stage::Screening
                };
                simulation.admit_or_enqueue(self.patient, next)?;
            }
            EventKind::ScreeningEnd { nurse } => {
                simulation.release_or_rebind(nurse, &[Stage::Screening, Stage::Exams])?;
                simulation.admit_or_enqueue(self.patient, Stage::Consultation)?;
            }
            EventKind::ConsultationEnd { doctor } => {
                simulation.release_or_rebind(doctor, &[Stage::Consultation])?;
                if simulation.patient(self.patient)?.needs_exams {
                    simulation.admit_or_enqueue(self.patient, Stage::Exams)?;
                } else {
                    simulation.discharge(self.patient)?;
                }
            }
            EventKind::ExamsEnd { nurse } => {
                simulation.release_or_rebind(nurse, &[Stage::Exams, Stage::Screening])?;
                simulation.discharge(self.patient)?;
            }
        }
        Ok(())
    }

    fn ensure_serving(&self, simulation: &Simulation, worker: WorkerId) -> SimulationResult<()> {
        let current = simulation.worker(worker)?.current_event();
        if current != Some(self.id) {
            return Err(SimulationError::invariant_violation(format!(
                "worker {} is bound to {:?}, not to finishing event {}",
                worker, current, self.id
            )));
        }
        Ok(())
    }
}
