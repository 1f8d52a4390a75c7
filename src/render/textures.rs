//! Artwork textures, decoded by the browser and copied onto the GPU.

use super::helpers;
use folio_core::TextureSet;
use web_sys as web;

pub struct ArtworkTexture {
    _texture: wgpu::Texture,
    pub(crate) bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl ArtworkTexture {
    /// Height over width of the source image.
    pub fn aspect(&self) -> f32 {
        self.height as f32 / self.width.max(1) as f32
    }
}

enum Slot {
    Loading(web::HtmlImageElement),
    Ready(ArtworkTexture),
    Failed,
}

/// One slot per catalog entry, filled as images finish decoding.
pub struct ArtworkTextures {
    slots: Vec<Slot>,
}

impl ArtworkTextures {
    pub fn load<'u>(urls: impl IntoIterator<Item = &'u str>) -> Self {
        let slots = urls
            .into_iter()
            .map(|url| match web::HtmlImageElement::new() {
                Ok(img) => {
                    img.set_cross_origin(Some("anonymous"));
                    img.set_src(url);
                    Slot::Loading(img)
                }
                Err(e) => {
                    log::error!("[textures] cannot create image for {}: {:?}", url, e);
                    Slot::Failed
                }
            })
            .collect();
        Self { slots }
    }

    /// True once every image is either uploaded or known to have failed.
    pub fn is_settled(&self) -> bool {
        !self.slots.iter().any(|s| matches!(s, Slot::Loading(_)))
    }

    /// Upload any images that finished decoding since the last call.
    pub fn poll(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
    ) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Slot::Loading(img) = slot else {
                continue;
            };
            if !img.complete() {
                continue;
            }
            let (w, h) = (img.natural_width(), img.natural_height());
            if w == 0 || h == 0 {
                log::warn!("[textures] {} failed to decode", img.src());
                *slot = Slot::Failed;
                continue;
            }
            let uploaded = upload(device, queue, layout, sampler, img, w, h);
            log::info!("[textures] artwork {} ready ({}x{})", index, w, h);
            *slot = Slot::Ready(uploaded);
        }
    }
}

fn upload(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    img: &web::HtmlImageElement,
    width: u32,
    height: u32,
) -> ArtworkTexture {
    let (texture, view) = helpers::create_color_texture_device(
        device,
        "artwork",
        width,
        height,
        wgpu::TextureFormat::Rgba8UnormSrgb,
        wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
    );
    queue.copy_external_image_to_texture(
        &wgpu::CopyExternalImageSourceInfo {
            source: wgpu::ExternalImageSource::HTMLImageElement(img.clone()),
            origin: wgpu::Origin2d::ZERO,
            flip_y: false,
        },
        wgpu::CopyExternalImageDestInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
            color_space: wgpu::PredefinedColorSpace::Srgb,
            premultiplied_alpha: false,
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("artwork_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });
    ArtworkTexture {
        _texture: texture,
        bind_group,
        width,
        height,
    }
}

impl TextureSet for ArtworkTextures {
    type Handle = ArtworkTexture;

    fn get(&self, index: usize) -> Option<&ArtworkTexture> {
        match self.slots.get(index) {
            Some(Slot::Ready(t)) => Some(t),
            _ => None,
        }
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}
