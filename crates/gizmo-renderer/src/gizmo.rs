//! Gizmo操作システム
//! 3種類のツールメッシュ、軸コライダー、マウスドラッグ状態を管理

use std::sync::Arc;

use glam::Vec3;
use gizmo_core::{GizmoConfig, GizmoError, Locatable, Ray};

use crate::colliders::AxisColliders;
use crate::mesh::MeshBuilder;
use crate::renderable::{GpuBackend, Renderable};

/// Gizmoモード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoMode {
    #[default]
    Translate,
    Scale,
    Rotate,
}

impl GizmoMode {
    pub const ALL: [GizmoMode; 3] = [GizmoMode::Translate, GizmoMode::Scale, GizmoMode::Rotate];

    fn label(self) -> &'static str {
        match self {
            GizmoMode::Translate => "Translate Gizmo",
            GizmoMode::Scale => "Scale Gizmo",
            GizmoMode::Rotate => "Rotate Gizmo",
        }
    }
}

/// Gizmo軸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GizmoAxis {
    X,
    Y,
    Z,
}

impl GizmoAxis {
    /// ヒットテスト順
    pub const ALL: [GizmoAxis; 3] = [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z];

    pub fn index(self) -> usize {
        match self {
            GizmoAxis::X => 0,
            GizmoAxis::Y => 1,
            GizmoAxis::Z => 2,
        }
    }

    pub fn unit(self) -> Vec3 {
        match self {
            GizmoAxis::X => Vec3::X,
            GizmoAxis::Y => Vec3::Y,
            GizmoAxis::Z => Vec3::Z,
        }
    }
}

/// マウスドラッグ状態
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    /// ボタンが離されている
    #[default]
    Idle,
    /// ボタン押下中、ただし押下時にどのハンドルにも当たらなかった
    TrackingUnlocked,
    /// ハンドル上で押下中。ドラッグで対象を`axis`方向へ移動
    TrackingLocked { axis: GizmoAxis, last_x: f32, last_y: f32 },
}

/// エディタ用トランスフォームGizmo
///
/// 操作対象は保持せず、マウス呼び出しごとに渡す。
/// Transformの所有権はシーン側に残る。
pub struct Gizmo<B: GpuBackend> {
    translate: Renderable<B>,
    scale: Renderable<B>,
    rotate: Renderable<B>,
    mode: GizmoMode,
    colliders: Arc<AxisColliders>,
    interaction: Interaction,
    last_scale: Option<f32>,
    config: GizmoConfig,
}

impl<B: GpuBackend> Gizmo<B> {
    /// 3つのツールメッシュを構築・アップロードし、スケール1を適用
    pub fn new(backend: &B, shader: B::Shader, config: GizmoConfig) -> Result<Self, GizmoError> {
        config.validate()?;

        let build = |mode: GizmoMode| -> Result<Renderable<B>, GizmoError> {
            let mesh = MeshBuilder::for_mode(mode, config.alpha);
            let mut renderable = Renderable::assemble(backend, mode.label(), &mesh)?;
            renderable.set_shader(shader.clone());
            Ok(renderable)
        };

        let mut gizmo = Self {
            translate: build(GizmoMode::Translate)?,
            scale: build(GizmoMode::Scale)?,
            rotate: build(GizmoMode::Rotate)?,
            mode: GizmoMode::default(),
            colliders: Arc::new(AxisColliders::generate(1.0)),
            interaction: Interaction::Idle,
            last_scale: None,
            config,
        };
        gizmo.update_scale(1.0);

        log::info!("Gizmo initialized");
        Ok(gizmo)
    }

    pub fn mode(&self) -> GizmoMode {
        self.mode
    }

    /// 描画メッシュを切り替える。現在のスケールを引き継ぐ
    pub fn set_mode(&mut self, mode: GizmoMode) {
        if mode == self.mode {
            return;
        }
        let scale = self.active_mesh().scale;
        self.mode = mode;
        self.mesh_mut(mode).scale = scale;
    }

    pub fn mesh(&self, mode: GizmoMode) -> &Renderable<B> {
        match mode {
            GizmoMode::Translate => &self.translate,
            GizmoMode::Scale => &self.scale,
            GizmoMode::Rotate => &self.rotate,
        }
    }

    fn mesh_mut(&mut self, mode: GizmoMode) -> &mut Renderable<B> {
        match mode {
            GizmoMode::Translate => &mut self.translate,
            GizmoMode::Scale => &mut self.scale,
            GizmoMode::Rotate => &mut self.rotate,
        }
    }

    /// このフレームで描画するメッシュ
    pub fn active_mesh(&self) -> &Renderable<B> {
        self.mesh(self.mode)
    }

    pub fn colliders(&self) -> &Arc<AxisColliders> {
        &self.colliders
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn locked_axis(&self) -> Option<GizmoAxis> {
        match self.interaction {
            Interaction::TrackingLocked { axis, .. } => Some(axis),
            _ => None,
        }
    }

    /// 最後に適用したスケール（初回更新前は`None`）
    pub fn last_scale(&self) -> Option<f32> {
        self.last_scale
    }

    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    /// Gizmoのスケールを更新（画面上のサイズを一定に保つため毎フレーム呼ぶ）
    /// `min_scale`未満や非有限値は`min_scale`にクランプする。
    /// `scale_epsilon`未満の変化は無視。適用したかどうかを返す
    pub fn update_scale(&mut self, scale: f32) -> bool {
        let scale = if scale.is_finite() && scale >= self.config.min_scale {
            scale
        } else {
            log::warn!(
                "degenerate gizmo scale {scale}, clamping to {}",
                self.config.min_scale
            );
            self.config.min_scale
        };

        if let Some(last) = self.last_scale {
            if (scale - last).abs() < self.config.scale_epsilon {
                return false;
            }
        }

        self.mesh_mut(self.mode).scale = Vec3::splat(scale);
        self.colliders = Arc::new(AxisColliders::generate(scale));
        self.last_scale = Some(scale);
        true
    }

    /// 左ボタン押下イベント
    /// `x`/`y`は正規化スクリーン座標、`ray`はカーソル下のワールド空間レイ
    ///
    /// 押下後の最初の呼び出しで軸を選択し、押下中の以降の呼び出しでは
    /// マウスの水平移動量だけ`target`をその軸方向へ移動する。適用した移動量を返す
    pub fn on_mouse_down<T: Locatable + ?Sized>(
        &mut self,
        x: f32,
        y: f32,
        ray: &Ray,
        target: &mut T,
    ) -> Option<Vec3> {
        match self.interaction {
            Interaction::Idle => {
                self.interaction = match self.colliders.hit_axis(ray) {
                    Some(axis) => {
                        log::debug!("gizmo locked to {axis:?} axis");
                        Interaction::TrackingLocked { axis, last_x: x, last_y: y }
                    }
                    None => Interaction::TrackingUnlocked,
                };
                None
            }
            Interaction::TrackingUnlocked => None,
            Interaction::TrackingLocked { axis, last_x, .. } => {
                // Only horizontal movement drives the translation
                let scale = self.last_scale.unwrap_or(1.0);
                let amount = scale * self.config.sensitivity * (last_x - x);
                let delta = axis.unit() * amount;
                target.translate(delta);

                self.interaction = Interaction::TrackingLocked { axis, last_x: x, last_y: y };
                Some(delta)
            }
        }
    }

    /// 左ボタン解放イベント。ドラッグを終了
    pub fn on_mouse_up(&mut self) {
        self.interaction = Interaction::Idle;
    }
}
