use crate::scene::context::Scene;

/// Renders the scene as a standalone HTML document.
///
/// The document embeds all drawables as literal JavaScript arrays and a
/// small WebGL scene-construction script. Output is a pure function of the
/// scene: identical scenes produce byte-identical documents.
pub fn render_document(scene: &Scene) -> String {
    let markers: Vec<String> = scene
        .markers
        .iter()
        .map(|m| {
            format!(
                "{{ p: [{}, {}, {}], label: '{}' }}",
                m.position.x,
                m.position.y,
                m.position.z,
                js_str(&m.text)
            )
        })
        .collect();

    let segments: Vec<String> = scene
        .segments
        .iter()
        .map(|s| {
            format!(
                "[[{}, {}, {}], [{}, {}, {}]]",
                s.start.x, s.start.y, s.start.z, s.end.x, s.end.y, s.end.z
            )
        })
        .collect();

    let callouts: Vec<String> = scene
        .annotations
        .iter()
        .map(|a| {
            format!(
                "{{ p: [{}, {}, {}], note: '{}' }}",
                a.position.x,
                a.position.y,
                a.position.z,
                js_str(&a.text)
            )
        })
        .collect();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{
    background: #ffffff;
    font-family: sans-serif;
    overflow: hidden;
    height: 100vh;
  }}
  #canvas-container {{
    position: absolute;
    top: 0; left: 0;
    width: 100%; height: 100%;
  }}
  #title-bar {{
    position: absolute;
    top: 12px; left: 50%;
    transform: translateX(-50%);
    font-size: 17px;
    color: #333;
    z-index: 10;
    pointer-events: none;
  }}
</style>
</head>
<body>
<div id="canvas-container"></div>
<div id="title-bar">{title}</div>

<script src="https://cdnjs.cloudflare.com/ajax/libs/three.js/r128/three.min.js"></script>
<script>
const markers = [
  {markers_str}
];
const segments = [
  {segments_str}
];
const callouts = [
  {callouts_str}
];
const axes = [
  {{ tip: [4.5, 0, 0], name: '{x_label}' }},
  {{ tip: [0, 4.5, 0], name: '{y_label}' }},
  {{ tip: [0, 0, 4.5], name: '{z_label}' }},
];

const container = document.getElementById('canvas-container');
const scene = new THREE.Scene();
scene.background = new THREE.Color(0xffffff);
const camera = new THREE.PerspectiveCamera(50, window.innerWidth / window.innerHeight, 0.1, 1000);

const renderer = new THREE.WebGLRenderer({{ antialias: true }});
renderer.setSize(window.innerWidth, window.innerHeight);
renderer.setPixelRatio(window.devicePixelRatio);
container.appendChild(renderer.domElement);

function textSprite(text, color) {{
    const canvas = document.createElement('canvas');
    const ctx = canvas.getContext('2d');
    const font = '28px sans-serif';
    ctx.font = font;
    const w = Math.ceil(ctx.measureText(text).width) + 16;
    const h = 40;
    canvas.width = w;
    canvas.height = h;
    ctx.font = font;
    ctx.textAlign = 'center';
    ctx.textBaseline = 'middle';
    ctx.fillStyle = color;
    ctx.fillText(text, w / 2, h / 2);
    const texture = new THREE.CanvasTexture(canvas);
    texture.minFilter = THREE.LinearFilter;
    const material = new THREE.SpriteMaterial({{ map: texture, transparent: true, depthTest: false }});
    const sprite = new THREE.Sprite(material);
    sprite.scale.set(w / 90, h / 90, 1);
    return sprite;
}}

// Axis lines with name sprites at the positive tips
const axisMaterial = new THREE.LineBasicMaterial({{ color: 0xbbbbbb }});
for (const axis of axes) {{
    const geometry = new THREE.BufferGeometry().setFromPoints([
        new THREE.Vector3(-axis.tip[0], -axis.tip[1], -axis.tip[2]),
        new THREE.Vector3(axis.tip[0], axis.tip[1], axis.tip[2]),
    ]);
    scene.add(new THREE.Line(geometry, axisMaterial));
    const name = textSprite(axis.name, '#555555');
    name.position.set(axis.tip[0] * 1.1, axis.tip[1] * 1.1, axis.tip[2] * 1.1);
    scene.add(name);
}}

// Vertex markers plus their labels
const pointsGeometry = new THREE.BufferGeometry();
const positions = new Float32Array(markers.length * 3);
for (let i = 0; i < markers.length; i++) {{
    positions[i * 3] = markers[i].p[0];
    positions[i * 3 + 1] = markers[i].p[1];
    positions[i * 3 + 2] = markers[i].p[2];
}}
pointsGeometry.setAttribute('position', new THREE.BufferAttribute(positions, 3));
const pointsMaterial = new THREE.PointsMaterial({{
    color: '{marker_color}',
    size: {marker_size},
    sizeAttenuation: false,
}});
scene.add(new THREE.Points(pointsGeometry, pointsMaterial));
for (const m of markers) {{
    const sprite = textSprite(m.label, '#222222');
    sprite.position.set(m.p[0], m.p[1] + 0.3, m.p[2]);
    scene.add(sprite);
}}

// Edge segments
const edgePositions = [];
for (const pair of segments) {{
    edgePositions.push(pair[0][0], pair[0][1], pair[0][2]);
    edgePositions.push(pair[1][0], pair[1][1], pair[1][2]);
}}
const edgeGeometry = new THREE.BufferGeometry();
edgeGeometry.setAttribute('position', new THREE.Float32BufferAttribute(edgePositions, 3));
const edgeMaterial = new THREE.LineBasicMaterial({{
    color: '{line_color}',
    linewidth: {line_width},
}});
scene.add(new THREE.LineSegments(edgeGeometry, edgeMaterial));

// Free-standing callouts
for (const c of callouts) {{
    const sprite = textSprite(c.note, '#222222');
    sprite.position.set(c.p[0], c.p[1], c.p[2]);
    scene.add(sprite);
}}

// Slow orbit around the scene
let time = 0;
let lastTime = performance.now() / 1000;
function animate() {{
    requestAnimationFrame(animate);
    const now = performance.now() / 1000;
    time += now - lastTime;
    lastTime = now;

    camera.position.x = Math.sin(time * 0.15) * 9;
    camera.position.z = Math.cos(time * 0.15) * 9;
    camera.position.y = 3;
    camera.lookAt(0, 1, 1);
    renderer.render(scene, camera);
}}
animate();

window.addEventListener('resize', () => {{
    camera.aspect = window.innerWidth / window.innerHeight;
    camera.updateProjectionMatrix();
    renderer.setSize(window.innerWidth, window.innerHeight);
}});
</script>
</body>
</html>"##,
        title = html_escape(&scene.title),
        x_label = js_str(&scene.axis_labels[0]),
        y_label = js_str(&scene.axis_labels[1]),
        z_label = js_str(&scene.axis_labels[2]),
        marker_color = js_str(&scene.style.marker_color),
        marker_size = scene.style.marker_size,
        line_color = js_str(&scene.style.line_color),
        line_width = scene.style.line_width,
        markers_str = markers.join(",\n  "),
        segments_str = segments.join(",\n  "),
        callouts_str = callouts.join(",\n  "),
    )
}

/// Escapes text for a single-quoted JavaScript string literal.
fn js_str(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace("</", "<\\/")
}

/// Escapes text for HTML element content.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
