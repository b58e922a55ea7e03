use super::{Latency, RecordKind, StoreRecord, StoreState};
use crate::error::SnapshareError;
use crate::utils::logging::with_pretty_json_debug;
use chrono::Utc;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use snapshare_schema::RecordId;
use std::marker::PhantomData;
use tracing::{debug, info, warn};

/// Boxed filter evaluated inside the store actor.
pub type StorePredicate<R> = Box<dyn Fn(&R) -> bool + Send>;

pub enum StoreMessage<R: StoreRecord> {
    /// Every record, in the kind's default order.
    GetAll(RpcReplyPort<Vec<R>>),

    /// Records matching a predicate, in the kind's default order.
    Find(StorePredicate<R>, RpcReplyPort<Vec<R>>),

    GetById(RecordId, RpcReplyPort<Result<R, SnapshareError>>),

    /// Assign the next id, stamp the creation time, append.
    Create(R::Create, RpcReplyPort<Result<R, SnapshareError>>),

    /// Shallow-merge a patch onto an existing record.
    Update(RecordId, R::Patch, RpcReplyPort<Result<R, SnapshareError>>),

    Delete(RecordId, RpcReplyPort<Result<R, SnapshareError>>),
}

/// Cloneable handle to one entity store.
///
/// Every call waits the store's latency, then goes through the actor mailbox.
/// The actor handles one message at a time, so overlapping `create` calls
/// always receive distinct ids.
pub struct StoreHandle<R: StoreRecord> {
    actor: ActorRef<StoreMessage<R>>,
    latency: Latency,
}

impl<R: StoreRecord> Clone for StoreHandle<R> {
    fn clone(&self) -> Self {
        Self {
            actor: self.actor.clone(),
            latency: self.latency,
        }
    }
}

fn rpc_error(kind: RecordKind, op: &str, err: impl std::fmt::Display) -> SnapshareError {
    SnapshareError::RactorError(format!("{kind} store {op} RPC failed: {err}"))
}

impl<R: StoreRecord> StoreHandle<R> {
    pub fn latency(&self) -> Latency {
        self.latency
    }

    pub async fn get_all(&self) -> Result<Vec<R>, SnapshareError> {
        self.latency.wait().await;
        ractor::call!(self.actor, StoreMessage::GetAll).map_err(|e| rpc_error(R::KIND, "GetAll", e))
    }

    /// Records for which `predicate` returns true, in default order. Never
    /// fails for an empty match.
    pub async fn find<F>(&self, predicate: F) -> Result<Vec<R>, SnapshareError>
    where
        F: Fn(&R) -> bool + Send + 'static,
    {
        self.latency.wait().await;
        let predicate: StorePredicate<R> = Box::new(predicate);
        ractor::call!(self.actor, StoreMessage::Find, predicate)
            .map_err(|e| rpc_error(R::KIND, "Find", e))
    }

    pub async fn get_by_id(&self, id: RecordId) -> Result<R, SnapshareError> {
        self.latency.wait().await;
        ractor::call!(self.actor, StoreMessage::GetById, id)
            .map_err(|e| rpc_error(R::KIND, "GetById", e))?
    }

    pub async fn create(&self, create: R::Create) -> Result<R, SnapshareError> {
        self.latency.wait().await;
        ractor::call!(self.actor, StoreMessage::Create, create)
            .map_err(|e| rpc_error(R::KIND, "Create", e))?
    }

    pub async fn update(&self, id: RecordId, patch: R::Patch) -> Result<R, SnapshareError> {
        self.latency.wait().await;
        ractor::call!(self.actor, StoreMessage::Update, id, patch)
            .map_err(|e| rpc_error(R::KIND, "Update", e))?
    }

    pub async fn delete(&self, id: RecordId) -> Result<R, SnapshareError> {
        self.latency.wait().await;
        ractor::call!(self.actor, StoreMessage::Delete, id)
            .map_err(|e| rpc_error(R::KIND, "Delete", e))?
    }

    /// Stop the store actor and wait for it to exit. Later calls on any clone
    /// fail with `RactorError`.
    pub async fn stop(&self) -> Result<(), SnapshareError> {
        self.actor
            .stop_and_wait(None, None)
            .await
            .map_err(|e| rpc_error(R::KIND, "Stop", e))?;
        debug!(kind = %R::KIND, "store stopped");
        Ok(())
    }
}

struct StoreActor<R>(PhantomData<fn() -> R>);

#[ractor::async_trait]
impl<R: StoreRecord> Actor for StoreActor<R> {
    type Msg = StoreMessage<R>;
    type State = StoreState<R>;
    type Arguments = StoreState<R>;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!(kind = %R::KIND, records = state.len(), "store actor initialized");
        Ok(state)
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            StoreMessage::GetAll(reply) => {
                let _ = reply.send(state.all());
            }
            StoreMessage::Find(predicate, reply) => {
                let res = state.filter(predicate);
                debug!(kind = %R::KIND, matched = res.len(), "store find");
                let _ = reply.send(res);
            }
            StoreMessage::GetById(id, reply) => {
                let _ = reply.send(state.get(id));
            }
            StoreMessage::Create(create, reply) => {
                let res = state.create(create, Utc::now());
                match &res {
                    Ok(record) => {
                        info!(kind = %R::KIND, id = record.id(), "record created");
                        with_pretty_json_debug(record, |pretty| {
                            debug!(kind = %R::KIND, record = %pretty, "created record body");
                        });
                    }
                    Err(e) => warn!(kind = %R::KIND, error = %e, "create rejected"),
                }
                let _ = reply.send(res);
            }
            StoreMessage::Update(id, patch, reply) => {
                debug!(kind = %R::KIND, id, ?patch, "applying patch");
                let res = state.update(id, patch);
                match &res {
                    Ok(_) => info!(kind = %R::KIND, id, "record updated"),
                    Err(e) => debug!(kind = %R::KIND, id, error = %e, "update rejected"),
                }
                let _ = reply.send(res);
            }
            StoreMessage::Delete(id, reply) => {
                let res = state.delete(id);
                match &res {
                    Ok(_) => info!(kind = %R::KIND, id, "record deleted"),
                    Err(e) => debug!(kind = %R::KIND, id, error = %e, "delete rejected"),
                }
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

/// Spawn a store seeded with `seed` and return a cloneable handle.
///
/// Fails with `Fixture` if the seed carries duplicate ids.
pub async fn spawn<R: StoreRecord>(
    seed: Vec<R>,
    latency: Latency,
) -> Result<StoreHandle<R>, SnapshareError> {
    let state = StoreState::from_seed(seed)?;
    let (actor, _jh) = Actor::spawn(None, StoreActor::<R>(PhantomData), state)
        .await
        .map_err(|e| SnapshareError::RactorError(format!("{} store spawn failed: {e}", R::KIND)))?;

    debug!(kind = %R::KIND, latency = ?latency.duration(), "store spawned");
    Ok(StoreHandle { actor, latency })
}
