//! Route trees, one per surface.
//!
//! ```text
//! /health                                  service and database health
//!
//! /                                        sheet listing (HTML)
//! /novo                                    creation form (HTML)
//! /enviar_cadastro                         create from form (POST, 303 -> /)
//! /ficha/{id}                              sheet view (HTML)
//! /editar/{id}                             edit form (HTML)
//! /atualizar_cadastro/{id}                 full replace from form (POST, 303 -> /)
//! /deletar/{id}                            delete (POST, 303 -> /)
//!
//! /api/atualizar_campo/{id}                partial patch (POST, JSON)
//! /personagem/                             create (POST, JSON)
//! /api/personagem/                         list (GET, JSON)
//! ```

pub mod api;
pub mod health;
pub mod pages;
